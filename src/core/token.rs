//! 토큰 / 문장 / 구 값 타입
//!
//! 오프셋과 길이는 모두 바이트가 아닌 문자(char) 단위입니다.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pos::KoreanPos;

/// 형태소 분석 결과 토큰
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KoreanToken {
    pub text: String,
    pub pos: KoreanPos,
    pub offset: usize,
    pub length: usize,
    /// 사전에 없는 단어 (미등록어)
    pub unknown: bool,
    /// 용언의 기본형 (예: 먹었 -> 먹다)
    pub stem: Option<String>,
}

impl KoreanToken {
    /// 새 토큰 생성 (길이는 텍스트의 문자 수)
    pub fn new(text: impl Into<String>, pos: KoreanPos, offset: usize) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            text,
            pos,
            offset,
            length,
            unknown: false,
            stem: None,
        }
    }

    /// 미등록어 표시
    pub fn with_unknown(mut self, unknown: bool) -> Self {
        self.unknown = unknown;
        self
    }

    /// 기본형 지정
    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = Some(stem.into());
        self
    }

    /// 토큰 끝 위치 (exclusive)
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

impl fmt::Display for KoreanToken {
    /// `착한(Adjective: 0, 2)`, `먹다(Verb(먹다): 14, 3)` 형식
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let star = if self.unknown { "*" } else { "" };
        write!(f, "{}{}({}", self.text, star, self.pos)?;
        if let Some(stem) = self.stem.as_deref().filter(|s| *s != self.text) {
            write!(f, "({})", stem)?;
        }
        write!(f, ": {}, {})", self.offset, self.length)
    }
}

/// 문장 구간 [start, end)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.text, self.start, self.end)
    }
}

/// 추출된 명사구 또는 해시태그
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KoreanPhrase {
    pub text: String,
    pub pos: KoreanPos,
    pub offset: usize,
    pub length: usize,
}

impl KoreanPhrase {
    pub fn new(text: impl Into<String>, pos: KoreanPos, offset: usize) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            text,
            pos,
            offset,
            length,
        }
    }
}

impl fmt::Display for KoreanPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}: {}, {})", self.text, self.pos, self.offset, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = KoreanToken::new("착한", KoreanPos::Adjective, 0);
        assert_eq!(token.to_string(), "착한(Adjective: 0, 2)");

        let space = KoreanToken::new(" ", KoreanPos::Space, 7);
        assert_eq!(space.to_string(), " (Space: 7, 1)");
    }

    #[test]
    fn test_unknown_token_display() {
        let token = KoreanToken::new("우햐나어가녀아뎌", KoreanPos::Unknown, 0).with_unknown(true);
        assert_eq!(token.to_string(), "우햐나어가녀아뎌*(Unknown: 0, 8)");
    }

    #[test]
    fn test_stem_display() {
        // 기본형이 표면형과 다를 때만 표시
        let token = KoreanToken::new("먹었", KoreanPos::Verb, 0).with_stem("먹다");
        assert_eq!(token.to_string(), "먹었(Verb(먹다): 0, 2)");

        let stemmed = KoreanToken {
            length: 3,
            ..KoreanToken::new("먹다", KoreanPos::Verb, 14).with_stem("먹다")
        };
        assert_eq!(stemmed.to_string(), "먹다(Verb: 14, 3)");
        assert_eq!(stemmed.end(), 17);
    }

    #[test]
    fn test_sentence_and_phrase_display() {
        let sentence = Sentence {
            text: "가을이다!".to_string(),
            start: 0,
            end: 5,
        };
        assert_eq!(sentence.to_string(), "가을이다!(0,5)");

        let phrase = KoreanPhrase::new("아름다운 트위터", KoreanPos::Noun, 0);
        assert_eq!(phrase.length, 8);
        assert_eq!(phrase.to_string(), "아름다운 트위터(Noun: 0, 8)");
    }
}
