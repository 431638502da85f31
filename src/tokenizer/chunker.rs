//! 청크 분리
//!
//! 같은 부류의 문자 덩어리(한글, 영문, 숫자, 공백, 문장부호)와
//! 트위터 특수 패턴(URL, 이메일, @아이디, #해시태그, $캐시태그)을
//! 하나의 정규식 대안 목록으로 잘라냅니다. 대안 순서가 곧 우선순위입니다.

use regex::Regex;
use std::sync::LazyLock;

use crate::core::{KoreanPos, KoreanToken};

/// (캡처 그룹 이름, 청크 품사) - 정규식 대안과 같은 순서
const CHUNK_GROUPS: [(&str, KoreanPos); 13] = [
    ("url", KoreanPos::Url),
    ("email", KoreanPos::Email),
    ("screen_name", KoreanPos::ScreenName),
    ("hashtag", KoreanPos::Hashtag),
    ("cash_tag", KoreanPos::CashTag),
    ("korean", KoreanPos::Korean),
    ("particle", KoreanPos::KoreanParticle),
    ("number", KoreanPos::Number),
    ("alpha", KoreanPos::Alpha),
    ("foreign", KoreanPos::Foreign),
    ("space", KoreanPos::Space),
    ("punct", KoreanPos::Punctuation),
    ("others", KoreanPos::Others),
];

static CHUNK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = [
        r"(?P<url>(?:https?://|www\.)[A-Za-z0-9\-._~:/?#\[\]@!$&'*+,;=%]*[A-Za-z0-9/#=~%_\-])",
        r"(?P<email>[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})",
        r"(?P<screen_name>@[A-Za-z0-9_]+)",
        r"(?P<hashtag>[#＃][\p{L}\p{N}_]+)",
        r"(?P<cash_tag>\$[A-Za-z]+)",
        r"(?P<korean>[가-힣]+)",
        r"(?P<particle>[ㄱ-ㅣ]+)",
        r"(?P<number>[0-9]+(?:[.,][0-9]+)*)",
        r"(?P<alpha>[A-Za-z]+)",
        r"(?P<foreign>[\p{L}&&[^가-힣ㄱ-ㅣA-Za-z]]+)",
        r"(?P<space>\s+)",
        r"(?P<punct>[[\p{P}\p{S}]&&[^#＃@$]]+|[\p{P}\p{S}])",
        r"(?P<others>(?s:.))",
    ]
    .join("|");
    Regex::new(&pattern).expect("chunk pattern must compile")
});

/// 텍스트를 청크 토큰으로 분리
///
/// 모든 문자가 정확히 하나의 청크에 속하며, 청크는 왼쪽부터 이어집니다.
pub fn chunk(text: &str) -> Vec<KoreanToken> {
    let mut chunks = Vec::new();
    let mut offset = 0;
    for caps in CHUNK_PATTERN.captures_iter(text) {
        let found = CHUNK_GROUPS
            .iter()
            .find_map(|&(name, pos)| caps.name(name).map(|m| (m.as_str(), pos)));
        if let Some((piece, pos)) = found {
            let token = KoreanToken::new(piece, pos, offset);
            offset += token.length;
            chunks.push(token);
        }
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(text: &str) -> Vec<(String, KoreanPos)> {
        chunk(text).into_iter().map(|t| (t.text, t.pos)).collect()
    }

    #[test]
    fn test_basic_classes() {
        assert_eq!(
            summary("착한강아지 abc 123ㅋㅋ!"),
            vec![
                ("착한강아지".to_string(), KoreanPos::Korean),
                (" ".to_string(), KoreanPos::Space),
                ("abc".to_string(), KoreanPos::Alpha),
                (" ".to_string(), KoreanPos::Space),
                ("123".to_string(), KoreanPos::Number),
                ("ㅋㅋ".to_string(), KoreanPos::KoreanParticle),
                ("!".to_string(), KoreanPos::Punctuation),
            ]
        );
    }

    #[test]
    fn test_twitter_patterns() {
        let chunks = summary("@user_1 #욕하지_말자 $TWTR a@b.com https://t.co/abc");
        let pos: Vec<KoreanPos> = chunks
            .iter()
            .map(|(_, p)| *p)
            .filter(|p| *p != KoreanPos::Space)
            .collect();
        assert_eq!(
            pos,
            vec![
                KoreanPos::ScreenName,
                KoreanPos::Hashtag,
                KoreanPos::CashTag,
                KoreanPos::Email,
                KoreanPos::Url,
            ]
        );
        assert_eq!(chunks[2].0, "#욕하지_말자");
    }

    #[test]
    fn test_offsets_are_char_based() {
        let chunks = chunk("시발 #욕하지_말자");
        assert_eq!(chunks[2].offset, 3);
        assert_eq!(chunks[2].length, 7);
    }

    #[test]
    fn test_punctuation_runs() {
        assert_eq!(
            summary("탄다......"),
            vec![
                ("탄다".to_string(), KoreanPos::Korean),
                ("......".to_string(), KoreanPos::Punctuation),
            ]
        );
        // 단독 #은 문장부호
        assert_eq!(summary("# "), vec![
            ("#".to_string(), KoreanPos::Punctuation),
            (" ".to_string(), KoreanPos::Space),
        ]);
    }

    #[test]
    fn test_foreign_and_numbers() {
        assert_eq!(
            summary("漢字3.14"),
            vec![
                ("漢字".to_string(), KoreanPos::Foreign),
                ("3.14".to_string(), KoreanPos::Number),
            ]
        );
    }

    #[test]
    fn test_chunks_cover_input() {
        let text = "아름다운 트위터를 만들어 보자. 시발 #욕하지_말자 😀";
        let joined: String = chunk(text).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_empty() {
        assert!(chunk("").is_empty());
    }
}
