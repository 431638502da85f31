//! 파일 기반 입력(사용자 사전, 설정)의 로드 에러

/// 사전/설정 파일 로드 에러
#[derive(Debug)]
pub enum KoreanTextError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 파일 형식 오류
    FormatError(String),
}

impl std::fmt::Display for KoreanTextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KoreanTextError::IoError(e) => write!(f, "파일 입출력 오류: {}", e),
            KoreanTextError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            KoreanTextError::FormatError(s) => write!(f, "형식 오류: {}", s),
        }
    }
}

impl std::error::Error for KoreanTextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KoreanTextError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KoreanTextError {
    fn from(e: std::io::Error) -> Self {
        KoreanTextError::IoError(e)
    }
}

impl From<serde_json::Error> for KoreanTextError {
    fn from(e: serde_json::Error) -> Self {
        KoreanTextError::ParseError(e.to_string())
    }
}
