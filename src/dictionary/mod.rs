//! 한국어 사전
//!
//! 표면형 -> 품사 매핑과 용언 기본형 조회를 제공합니다.
//!
//! # 사용 예시
//!
//! ```
//! use korean_text::dictionary::KoreanDictionary;
//! use korean_text::KoreanPos;
//!
//! let dict = KoreanDictionary::new();
//! assert!(dict.pos_of("강아지").contains(&KoreanPos::Noun));
//!
//! // 공백이 들어간 단어는 무시됩니다
//! assert_eq!(dict.add_nouns(["우햐나", "띄어 쓴 말"]), 1);
//! assert!(dict.contains("우햐나"));
//! ```

mod conjugation;
pub mod lexicon;
mod store;
mod trie;

pub use conjugation::{conjugate, stem_class, StemClass};
pub use store::{KoreanDictionary, Lexicon};
