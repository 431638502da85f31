//! 품사 태그

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 한국어 품사 (단어 수준 / 청크 수준 / 기능 태그)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KoreanPos {
    // 단어 수준
    Noun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Exclamation,
    Josa,
    Eomi,
    PreEomi,
    Conjunction,
    NounPrefix,
    VerbPrefix,
    Suffix,
    Unknown,
    ProperNoun,

    // 청크 수준
    Korean,
    Foreign,
    Number,
    KoreanParticle,
    Alpha,
    Punctuation,
    Hashtag,
    ScreenName,
    Email,
    #[serde(rename = "URL")]
    Url,
    CashTag,

    // 기능
    Space,
    Others,
}

impl KoreanPos {
    /// 모든 품사 (표시 순서)
    pub const ALL: [KoreanPos; 28] = [
        KoreanPos::Noun,
        KoreanPos::Verb,
        KoreanPos::Adjective,
        KoreanPos::Adverb,
        KoreanPos::Determiner,
        KoreanPos::Exclamation,
        KoreanPos::Josa,
        KoreanPos::Eomi,
        KoreanPos::PreEomi,
        KoreanPos::Conjunction,
        KoreanPos::NounPrefix,
        KoreanPos::VerbPrefix,
        KoreanPos::Suffix,
        KoreanPos::Unknown,
        KoreanPos::ProperNoun,
        KoreanPos::Korean,
        KoreanPos::Foreign,
        KoreanPos::Number,
        KoreanPos::KoreanParticle,
        KoreanPos::Alpha,
        KoreanPos::Punctuation,
        KoreanPos::Hashtag,
        KoreanPos::ScreenName,
        KoreanPos::Email,
        KoreanPos::Url,
        KoreanPos::CashTag,
        KoreanPos::Space,
        KoreanPos::Others,
    ];

    /// 표시 이름
    pub fn name(self) -> &'static str {
        match self {
            KoreanPos::Noun => "Noun",
            KoreanPos::Verb => "Verb",
            KoreanPos::Adjective => "Adjective",
            KoreanPos::Adverb => "Adverb",
            KoreanPos::Determiner => "Determiner",
            KoreanPos::Exclamation => "Exclamation",
            KoreanPos::Josa => "Josa",
            KoreanPos::Eomi => "Eomi",
            KoreanPos::PreEomi => "PreEomi",
            KoreanPos::Conjunction => "Conjunction",
            KoreanPos::NounPrefix => "NounPrefix",
            KoreanPos::VerbPrefix => "VerbPrefix",
            KoreanPos::Suffix => "Suffix",
            KoreanPos::Unknown => "Unknown",
            KoreanPos::ProperNoun => "ProperNoun",
            KoreanPos::Korean => "Korean",
            KoreanPos::Foreign => "Foreign",
            KoreanPos::Number => "Number",
            KoreanPos::KoreanParticle => "KoreanParticle",
            KoreanPos::Alpha => "Alpha",
            KoreanPos::Punctuation => "Punctuation",
            KoreanPos::Hashtag => "Hashtag",
            KoreanPos::ScreenName => "ScreenName",
            KoreanPos::Email => "Email",
            KoreanPos::Url => "URL",
            KoreanPos::CashTag => "CashTag",
            KoreanPos::Space => "Space",
            KoreanPos::Others => "Others",
        }
    }

    /// 체언 (명사류)
    pub fn is_nominal(self) -> bool {
        matches!(self, KoreanPos::Noun | KoreanPos::ProperNoun | KoreanPos::Suffix)
    }

    /// 용언 (동사/형용사)
    pub fn is_predicate(self) -> bool {
        matches!(self, KoreanPos::Verb | KoreanPos::Adjective)
    }

    /// 어미류 (어미/선어말어미)
    pub fn is_ending(self) -> bool {
        matches!(self, KoreanPos::Eomi | KoreanPos::PreEomi)
    }

    /// 사전에 등록될 수 있는 단어 수준 품사
    pub fn is_word_level(self) -> bool {
        matches!(
            self,
            KoreanPos::Noun
                | KoreanPos::Verb
                | KoreanPos::Adjective
                | KoreanPos::Adverb
                | KoreanPos::Determiner
                | KoreanPos::Exclamation
                | KoreanPos::Josa
                | KoreanPos::Eomi
                | KoreanPos::PreEomi
                | KoreanPos::Conjunction
                | KoreanPos::NounPrefix
                | KoreanPos::VerbPrefix
                | KoreanPos::Suffix
                | KoreanPos::ProperNoun
        )
    }
}

impl fmt::Display for KoreanPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 알 수 없는 품사 이름
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosError(pub String);

impl fmt::Display for UnknownPosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "알 수 없는 품사: {}", self.0)
    }
}

impl std::error::Error for UnknownPosError {}

impl FromStr for KoreanPos {
    type Err = UnknownPosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KoreanPos::ALL
            .iter()
            .copied()
            .find(|pos| pos.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPosError(s.to_string()))
    }
}
