//! 핵심 타입과 한글 유니코드 연산

pub mod pos;
pub mod token;
pub mod unicode;

pub use pos::KoreanPos;
pub use token::{KoreanPhrase, KoreanToken, Sentence};
