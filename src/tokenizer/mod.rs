//! 토크나이저
//!
//! 텍스트 -> 청크 -> (한글 청크만) 사전 기반 분해 -> 토큰열.
//! 정규화와 어간 추출은 이 모듈 밖(`KoreanProcessor`)에서 적용합니다.
//!
//! 결과 토큰은 공백을 포함해 입력 전체를 빈틈없이 덮습니다.

mod chunker;
mod segmenter;

pub use chunker::chunk;
pub use segmenter::segment;

use crate::core::{KoreanPos, KoreanToken};
use crate::dictionary::{KoreanDictionary, Lexicon};

/// 사전을 들고 있는 토크나이저
#[derive(Debug, Clone, Default)]
pub struct KoreanTokenizer {
    dictionary: KoreanDictionary,
}

impl KoreanTokenizer {
    pub fn new(dictionary: KoreanDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &KoreanDictionary {
        &self.dictionary
    }

    /// 공백 토큰을 포함한 토큰열
    ///
    /// 호출 하나는 사전 스냅샷 하나로 끝까지 처리됩니다.
    pub fn tokenize(&self, text: &str) -> Vec<KoreanToken> {
        let lexicon = self.dictionary.snapshot();
        tokenize_with(text, &lexicon)
    }
}

/// 주어진 어휘로 토큰화
pub fn tokenize_with(text: &str, lexicon: &Lexicon) -> Vec<KoreanToken> {
    let mut tokens = Vec::new();
    for chunk in chunk(text) {
        match chunk.pos {
            KoreanPos::Korean => tokens.extend(segment(&chunk, lexicon)),
            _ => tokens.push(chunk),
        }
    }
    tokens
}

/// 공백 토큰 제거 (다른 토큰의 오프셋은 그대로)
pub fn remove_spaces(tokens: Vec<KoreanToken>) -> Vec<KoreanToken> {
    tokens
        .into_iter()
        .filter(|t| t.pos != KoreanPos::Space)
        .collect()
}
