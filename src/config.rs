//! 처리기 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::KoreanTextError;

/// 처리 단계 on/off 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// 토큰화 전 정규화
    #[serde(default = "default_true")]
    pub normalizer_enabled: bool,
    /// 토큰화 후 어간 추출
    #[serde(default = "default_true")]
    pub stemmer_enabled: bool,
    /// 결과에 공백 토큰 유지
    #[serde(default)]
    pub keep_space_enabled: bool,
    /// 구 추출 시 스팸/욕설 제외
    #[serde(default)]
    pub phrase_spam_filter_enabled: bool,
    /// 구 추출 결과에 해시태그 포함
    #[serde(default = "default_true")]
    pub phrase_hashtags_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            normalizer_enabled: true,
            stemmer_enabled: true,
            keep_space_enabled: false,
            phrase_spam_filter_enabled: false,
            phrase_hashtags_enabled: true,
        }
    }
}

impl ProcessorConfig {
    pub fn with_normalizer(mut self, enabled: bool) -> Self {
        self.normalizer_enabled = enabled;
        self
    }

    pub fn with_stemmer(mut self, enabled: bool) -> Self {
        self.stemmer_enabled = enabled;
        self
    }

    pub fn with_keep_space(mut self, enabled: bool) -> Self {
        self.keep_space_enabled = enabled;
        self
    }

    pub fn with_phrase_spam_filter(mut self, enabled: bool) -> Self {
        self.phrase_spam_filter_enabled = enabled;
        self
    }

    pub fn with_phrase_hashtags(mut self, enabled: bool) -> Self {
        self.phrase_hashtags_enabled = enabled;
        self
    }
}

/// 설정 파일 경로: $KOREAN_TEXT_CONFIG 또는 $HOME/.config/korean-text/config.json
/// 둘 다 없으면 None (기본 설정 사용)
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("KOREAN_TEXT_CONFIG").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .filter(|home| home.is_absolute())
        .map(|home| home.join(".config").join("korean-text").join("config.json"))
}

/// 설정 파일 로드 (에러 반환)
pub fn try_load_config(path: &Path) -> Result<ProcessorConfig, KoreanTextError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> ProcessorConfig {
    match try_load_config(path) {
        Ok(config) => config,
        Err(KoreanTextError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            ProcessorConfig::default()
        }
        Err(e) => {
            log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
            ProcessorConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &ProcessorConfig, path: &Path) -> Result<(), KoreanTextError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("korean-text-config-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert!(config.normalizer_enabled);
        assert!(config.stemmer_enabled);
        assert!(!config.keep_space_enabled);
        assert!(!config.phrase_spam_filter_enabled);
        assert!(config.phrase_hashtags_enabled);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = ProcessorConfig::default()
            .with_stemmer(false)
            .with_keep_space(true);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ProcessorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 일부 필드만 있는 설정 파일은 나머지를 기본값으로
        let json = r#"{"keep_space_enabled": true}"#;
        let config: ProcessorConfig = serde_json::from_str(json).unwrap();
        assert!(config.keep_space_enabled);
        assert!(config.normalizer_enabled);
        assert!(config.phrase_hashtags_enabled);
    }

    #[test]
    fn test_config_path_from_env() {
        // 환경 변수를 바꾼 뒤 끝에서 되돌림
        let saved_config = std::env::var_os("KOREAN_TEXT_CONFIG");
        let saved_home = std::env::var_os("HOME");

        std::env::set_var("KOREAN_TEXT_CONFIG", "/etc/korean-text.json");
        assert_eq!(config_path(), Some(PathBuf::from("/etc/korean-text.json")));

        std::env::remove_var("KOREAN_TEXT_CONFIG");
        std::env::set_var("HOME", "/home/lulu");
        assert_eq!(
            config_path(),
            Some(PathBuf::from("/home/lulu/.config/korean-text/config.json"))
        );

        std::env::remove_var("HOME");
        assert_eq!(config_path(), None);

        match saved_config {
            Some(v) => std::env::set_var("KOREAN_TEXT_CONFIG", v),
            None => std::env::remove_var("KOREAN_TEXT_CONFIG"),
        }
        match saved_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let config = ProcessorConfig::default().with_phrase_spam_filter(true);
        save_config(&config, &path).unwrap();
        assert_eq!(try_load_config(&path).unwrap(), config);
        assert_eq!(load_config(&path), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let missing = temp_path("missing");
        assert_eq!(load_config(&missing), ProcessorConfig::default());
        assert!(matches!(
            try_load_config(&missing),
            Err(KoreanTextError::IoError(_))
        ));

        let broken = temp_path("broken");
        fs::create_dir_all(broken.parent().unwrap()).unwrap();
        fs::write(&broken, "{ not json").unwrap();
        assert_eq!(load_config(&broken), ProcessorConfig::default());
        assert!(matches!(
            try_load_config(&broken),
            Err(KoreanTextError::ParseError(_))
        ));
        let _ = fs::remove_dir_all(broken.parent().unwrap());
    }
}
