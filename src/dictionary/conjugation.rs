//! 용언 활용형 생성
//!
//! 기본형(먹다)에서 표면형(먹, 먹은, 먹는, 먹어, 먹었 ...)을 펼칩니다.
//! 토크나이저는 이 표면형을 사전 단어로 보고, 어간과 어미가 붙은 덩어리를
//! 한 토큰으로 인식합니다.

use crate::core::unicode::{
    combine_jungseong, has_jongseong, jongseong_of, jungseong_of, with_jongseong, with_jungseong,
    JONG_BIEUP, JONG_HIEUH, JONG_NIEUN, JONG_NONE, JONG_RIEUL, JONG_SSANGSIOS, JUNG_A, JUNG_AE,
    JUNG_E, JUNG_EO, JUNG_EU, JUNG_I, JUNG_O, JUNG_OE, JUNG_U, JUNG_WAE, JUNG_YEO,
};

/// 어간 끝 음절의 활용 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemClass {
    /// 규칙 활용
    Regular,
    /// ㅂ 불규칙 (귀엽다 -> 귀여운, 귀여워)
    Bieup,
    /// ㅎ 불규칙 (그렇다 -> 그런, 그래)
    Hieuh,
}

/// 기본형에서 어간 분리 (먹다 -> 먹)
fn split_citation(citation: &str) -> Option<Vec<char>> {
    let stem = citation.strip_suffix('다')?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.chars().collect())
}

fn join(head: &[char], last: char, tail: &str) -> String {
    let mut s: String = head.iter().collect();
    s.push(last);
    s.push_str(tail);
    s
}

/// 양성 모음 (ㅏ, ㅗ) 여부
fn is_bright(c: char) -> bool {
    matches!(jungseong_of(c), Some(JUNG_A) | Some(JUNG_O))
}

/// 연결형 -아/-어 (해, 먹어, 봐, 줘, 마셔, 귀여워, 그래)
fn connective_form(head: &[char], last: char, class: StemClass) -> Option<String> {
    match class {
        StemClass::Bieup => {
            let bare = with_jongseong(last, JONG_NONE)?;
            return Some(join(head, bare, "워"));
        }
        StemClass::Hieuh => {
            let bare = with_jongseong(last, JONG_NONE)?;
            return Some(join(head, with_jungseong(bare, JUNG_AE)?, ""));
        }
        StemClass::Regular => {}
    }

    if last == '하' {
        return Some(join(head, '해', ""));
    }
    if has_jongseong(last) {
        let tail = if is_bright(last) { "아" } else { "어" };
        return Some(join(head, last, tail));
    }

    let contracted = match jungseong_of(last)? {
        JUNG_A | JUNG_EO | JUNG_AE | JUNG_E | JUNG_YEO => last,
        JUNG_O => with_jungseong(last, combine_jungseong(JUNG_O, JUNG_A)?)?,
        JUNG_U => with_jungseong(last, combine_jungseong(JUNG_U, JUNG_EO)?)?,
        JUNG_I => with_jungseong(last, JUNG_YEO)?,
        JUNG_OE => with_jungseong(last, JUNG_WAE)?,
        JUNG_EU => {
            // 바쁘 -> 바빠, 크 -> 커
            let bright = head.last().is_some_and(|&prev| is_bright(prev));
            with_jungseong(last, if bright { JUNG_A } else { JUNG_EO })?
        }
        _ => return Some(join(head, last, "어")),
    };
    Some(join(head, contracted, ""))
}

/// 관형형/격식형 받침 붙이기 (ㄴ, ㄹ, ㅂ)
fn with_final(head: &[char], last: char, class: StemClass, jong: u32) -> Option<String> {
    match class {
        StemClass::Bieup => {
            let bare = with_jongseong(last, JONG_NONE)?;
            let tail = match jong {
                JONG_NIEUN => "운",
                JONG_RIEUL => "울",
                _ => return None,
            };
            Some(join(head, bare, tail))
        }
        StemClass::Hieuh => Some(join(head, with_jongseong(last, jong)?, "")),
        StemClass::Regular => match jongseong_of(last)? {
            JONG_NONE | JONG_RIEUL => Some(join(head, with_jongseong(last, jong)?, "")),
            _ => {
                let tail = match jong {
                    JONG_NIEUN => "은",
                    JONG_RIEUL => "을",
                    _ => return None,
                };
                Some(join(head, last, tail))
            }
        },
    }
}

/// 기본형의 모든 표면형 생성 (중복 없음, 기본형 포함)
pub fn conjugate(citation: &str, class: StemClass) -> Vec<String> {
    let Some(stem) = split_citation(citation) else {
        return vec![citation.to_string()];
    };
    let (head, last) = match stem.split_last() {
        Some((&last, head)) => (head, last),
        None => return vec![citation.to_string()],
    };

    let bare: String = stem.iter().collect();
    let mut forms = vec![
        citation.to_string(),
        bare.clone(),
        format!("{}고", bare),
        format!("{}게", bare),
        format!("{}지", bare),
    ];

    // 관형형 -는 (ㄹ 어간은 ㄹ 탈락: 만들 -> 만드는)
    if class == StemClass::Regular && jongseong_of(last) == Some(JONG_RIEUL) {
        if let Some(dropped) = with_jongseong(last, JONG_NONE) {
            forms.push(join(head, dropped, "는"));
        }
    } else {
        forms.push(format!("{}는", bare));
    }

    for jong in [JONG_NIEUN, JONG_RIEUL, JONG_BIEUP] {
        if let Some(form) = with_final(head, last, class, jong) {
            forms.push(form);
        }
    }

    if let Some(connective) = connective_form(head, last, class) {
        for tail in ["서", "도", "요"] {
            forms.push(format!("{}{}", connective, tail));
        }
        // 과거형: 마지막 음절에 ㅆ 받침 (먹어 -> 먹었, 해 -> 했)
        let mut chars: Vec<char> = connective.chars().collect();
        if let Some(end) = chars.last_mut() {
            if let Some(past) = with_jongseong(*end, JONG_SSANGSIOS) {
                *end = past;
                forms.push(chars.iter().collect());
            }
        }
        forms.push(connective);
    }

    let mut seen = std::collections::HashSet::new();
    forms.retain(|f| seen.insert(f.clone()));
    forms
}

/// 활용 유형 판정 (ㅎ 받침 규칙 용언은 Regular)
pub fn stem_class(citation: &str, bieup: bool, hieuh: bool) -> StemClass {
    let last = citation.strip_suffix('다').and_then(|s| s.chars().last());
    match last.and_then(jongseong_of) {
        Some(JONG_BIEUP) if bieup => StemClass::Bieup,
        Some(JONG_HIEUH) if hieuh => StemClass::Hieuh,
        _ => StemClass::Regular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(citation: &str, class: StemClass) -> Vec<String> {
        conjugate(citation, class)
    }

    #[test]
    fn test_regular_consonant_stem() {
        let f = forms("먹다", StemClass::Regular);
        for expected in ["먹다", "먹", "먹은", "먹을", "먹는", "먹어", "먹었", "먹어서", "먹고"] {
            assert!(f.contains(&expected.to_string()), "{} 없음: {:?}", expected, f);
        }
        // 자음 어간에는 ㅂ 격식형이 없음 (먹 + 습니다)
        assert!(!f.iter().any(|s| s == "먹읍"));
    }

    #[test]
    fn test_regular_vowel_stem() {
        let f = forms("하다", StemClass::Regular);
        for expected in ["하", "한", "할", "합", "하는", "해", "했", "해서", "하게"] {
            assert!(f.contains(&expected.to_string()), "{} 없음: {:?}", expected, f);
        }

        let f = forms("보다", StemClass::Regular);
        assert!(f.contains(&"봐".to_string()));
        assert!(f.contains(&"봤".to_string()));

        let f = forms("주다", StemClass::Regular);
        assert!(f.contains(&"줘".to_string()));

        let f = forms("마시다", StemClass::Regular);
        assert!(f.contains(&"마셔".to_string()));
    }

    #[test]
    fn test_eu_contraction_follows_vowel_harmony() {
        assert!(forms("바쁘다", StemClass::Regular).contains(&"바빠".to_string()));
        assert!(forms("크다", StemClass::Regular).contains(&"커".to_string()));
        assert!(forms("예쁘다", StemClass::Regular).contains(&"예뻐".to_string()));
    }

    #[test]
    fn test_rieul_stem() {
        let f = forms("만들다", StemClass::Regular);
        for expected in ["만들", "만든", "만드는", "만듭", "만들어", "만들었"] {
            assert!(f.contains(&expected.to_string()), "{} 없음: {:?}", expected, f);
        }
    }

    #[test]
    fn test_bieup_irregular() {
        let f = forms("아름답다", StemClass::Bieup);
        for expected in ["아름답", "아름다운", "아름다워", "아름다웠", "아름답지"] {
            assert!(f.contains(&expected.to_string()), "{} 없음: {:?}", expected, f);
        }
        let f = forms("귀엽다", StemClass::Bieup);
        assert!(f.contains(&"귀여워서".to_string()));
        let f = forms("눕다", StemClass::Bieup);
        assert!(f.contains(&"누워".to_string()));
    }

    #[test]
    fn test_hieuh_irregular() {
        let f = forms("그렇다", StemClass::Hieuh);
        for expected in ["그렇지", "그런", "그래", "그랬"] {
            assert!(f.contains(&expected.to_string()), "{} 없음: {:?}", expected, f);
        }
    }

    #[test]
    fn test_copula() {
        let f = forms("이다", StemClass::Regular);
        for expected in ["이", "입", "인", "이다", "였"] {
            assert!(f.contains(&expected.to_string()), "{} 없음: {:?}", expected, f);
        }
    }

    #[test]
    fn test_no_duplicates() {
        let f = forms("가다", StemClass::Regular);
        let unique: std::collections::HashSet<_> = f.iter().collect();
        assert_eq!(unique.len(), f.len());
    }

    #[test]
    fn test_stem_class() {
        assert_eq!(stem_class("귀엽다", true, false), StemClass::Bieup);
        assert_eq!(stem_class("그렇다", false, true), StemClass::Hieuh);
        assert_eq!(stem_class("좋다", false, false), StemClass::Regular);
        assert_eq!(stem_class("잡다", false, false), StemClass::Regular);
    }
}
