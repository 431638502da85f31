//! 한국어 텍스트 처리: 정규화, 토큰화, 어간 추출, 구 추출, 문장 분리

pub mod config;
pub mod core;
pub mod detokenizer;
pub mod dictionary;
pub mod error;
pub mod normalizer;
pub mod phrase;
pub mod processor;
pub mod sentence;
pub mod stemmer;
pub mod tokenizer;

pub use config::ProcessorConfig;
pub use core::{KoreanPhrase, KoreanPos, KoreanToken, Sentence};
pub use detokenizer::detokenize;
pub use dictionary::KoreanDictionary;
pub use error::KoreanTextError;
pub use normalizer::normalize;
pub use phrase::{extract_phrases, PhraseExtractor};
pub use processor::KoreanProcessor;
pub use sentence::split_sentences;
pub use tokenizer::KoreanTokenizer;
