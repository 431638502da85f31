//! 구어체 정규화
//!
//! 1. 감정 표현 받침 분리: `닼ㅋㅋ` -> `다ㅋㅋㅋ`
//! 2. 오타 교정: `겟씀다` -> `겠습니다`
//! 3. 반복 축약: `ㅋㅋㅋㅋ` -> `ㅋㅋ`, `!!!!` -> `!!`
//!
//! 이미 정규화된 텍스트를 다시 넣어도 결과가 같습니다.

use std::sync::LazyLock;

use crate::core::unicode::{
    is_compat_jamo, is_hangul_syllable, jongseong_of, jongseong_to_jamo_char, with_jongseong,
    JONG_HIEUH, JONG_KIEUK, JONG_NONE,
};

/// 반복을 허용하는 최대 길이
const MAX_REPEAT: usize = 2;

/// 오타 교정 반복 상한
const MAX_TYPO_PASSES: usize = 8;

/// 자주 쓰이는 오타 -> 교정형
/// 교정형에는 어떤 오타 키도 들어있지 않아야 합니다.
#[rustfmt::skip]
const TYPOS: &[(&str, &str)] = &[
    ("겟씀다", "겠습니다"), ("겟슴다", "겠습니다"), ("겟습니다", "겠습니다"),
    ("겟다", "겠다"), ("겟어", "겠어"), ("겟지", "겠지"), ("겟네", "겠네"), ("겟음", "겠음"),
    ("씀다", "습니다"), ("슴다", "습니다"), ("읍니다", "습니다"),
    ("햇다", "했다"), ("햇어", "했어"), ("됬", "됐"),
    ("몇일", "며칠"), ("어떻해", "어떡해"), ("웬지", "왠지"), ("금새", "금세"),
    ("할께", "할게"), ("갈께", "갈게"), ("줄께", "줄게"),
    ("설겆이", "설거지"), ("역활", "역할"), ("희안", "희한"), ("오랫만", "오랜만"),
];

/// 긴 키부터 매칭하도록 정렬된 오타 표
static TYPO_TABLE: LazyLock<Vec<(Vec<char>, &'static str)>> = LazyLock::new(|| {
    let mut table: Vec<(Vec<char>, &'static str)> = TYPOS
        .iter()
        .map(|&(from, to)| (from.chars().collect(), to))
        .collect();
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    table
});

/// 반복 축약 대상 문자 (낱자모 외)
fn is_repeatable_mark(c: char) -> bool {
    matches!(c, '!' | '?' | '~')
}

/// 텍스트 정규화
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let split = split_emotive_codas(text);
    let corrected = correct_typos(&split);
    collapse_repeats(&corrected)
}

/// ㅋ/ㅎ 받침이 같은 낱자 앞에 붙은 경우 받침을 떼어냄
fn split_emotive_codas(text: &str) -> Vec<char> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::with_capacity(chars.len() + 1);
    for (i, &c) in chars.iter().enumerate() {
        if !is_hangul_syllable(c) {
            out.push(c);
            continue;
        }
        let next = chars.get(i + 1).copied();
        match jongseong_of(c) {
            Some(jong @ (JONG_KIEUK | JONG_HIEUH)) if next == jongseong_to_jamo_char(jong) => {
                match (with_jongseong(c, JONG_NONE), jongseong_to_jamo_char(jong)) {
                    (Some(open), Some(jamo)) => {
                        out.push(open);
                        out.push(jamo);
                    }
                    _ => out.push(c),
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// 오타 표 기반 교정
///
/// 교정형이 앞 글자와 이어져 새 키가 될 수 있으므로 (`겟읍니다` -> `겟습니다` -> `겠습니다`)
/// 더 바뀌지 않을 때까지 반복합니다.
fn correct_typos(chars: &[char]) -> Vec<char> {
    let mut current = correct_typos_once(chars);
    for _ in 1..MAX_TYPO_PASSES {
        let next = correct_typos_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// 한 번 훑으며 교정 (왼쪽부터 가장 긴 키 우선)
fn correct_typos_once(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let rest = &chars[i..];
        match TYPO_TABLE.iter().find(|(from, _)| rest.starts_with(from)) {
            Some((from, to)) => {
                out.extend(to.chars());
                i += from.len();
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

/// 낱자모 및 !?~ 반복을 MAX_REPEAT 글자로 축약
fn collapse_repeats(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut run_char = None;
    let mut run_len = 0;
    for &c in chars {
        if run_char == Some(c) {
            run_len += 1;
        } else {
            run_char = Some(c);
            run_len = 1;
        }
        let collapsible = is_compat_jamo(c) || is_repeatable_mark(c);
        if !collapsible || run_len <= MAX_REPEAT {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_typos_and_laughter() {
        assert_eq!(normalize("힘들겟씀다 그래욬ㅋㅋㅋ"), "힘들겠습니다 그래요ㅋㅋ");
        assert_eq!(normalize("그랰ㅋㅋㅋㅋㅋㅋ"), "그래ㅋㅋ");
    }

    #[test]
    fn test_coda_split() {
        assert_eq!(normalize("예시입니닼ㅋㅋㅋㅋㅋ"), "예시입니다ㅋㅋ");
        assert_eq!(normalize("하핳ㅎ"), "하하ㅎㅎ");
        // 받침과 뒤 낱자가 다르면 그대로
        assert_eq!(normalize("닼ㅎ"), "닼ㅎ");
        // 일반 받침은 건드리지 않음
        assert_eq!(normalize("먹ㄱ"), "먹ㄱ");
    }

    #[test]
    fn test_collapse_repeats() {
        assert_eq!(normalize("ㅠㅠㅠㅠㅠ"), "ㅠㅠ");
        assert_eq!(normalize("가자!!!!"), "가자!!");
        assert_eq!(normalize("뭐???"), "뭐??");
        // 음절과 마침표는 축약하지 않음
        assert_eq!(normalize("하하하하"), "하하하하");
        assert_eq!(normalize("탄다......"), "탄다......");
    }

    #[test]
    fn test_typo_longest_match() {
        assert_eq!(normalize("없읍니다"), "없습니다");
        assert_eq!(normalize("몇일 뒤에 갈께"), "며칠 뒤에 갈게");
        assert_eq!(normalize("됬다"), "됐다");
    }

    #[test]
    fn test_typo_formed_across_replacement() {
        // 교정 결과와 앞 글자가 합쳐 생긴 오타도 교정
        assert_eq!(normalize("겟읍니다"), "겠습니다");
        assert_eq!(normalize("할겟읍니다"), "할겠습니다");
    }

    #[test]
    fn test_typo_outputs_contain_no_keys() {
        for (_, to) in TYPOS {
            for (from, _) in TYPOS {
                assert!(!to.contains(from), "{} 안에 {}", to, from);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "힘들겟씀다 그래욬ㅋㅋㅋ",
            "예시입니닼ㅋㅋㅋㅋㅋ",
            "씀닼ㅋㅋ",
            "ㅋㅋㅋㅎㅎㅎㅎ!!!???~~~",
            "오랫만에 웬지 기분이 좋아욯ㅎㅎㅎ",
            "평범한 문장입니다.",
            "겟읍니다",
            "할겟읍니다",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "입력: {}", s);
        }
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize("착한강아지상을 받은 루루"), "착한강아지상을 받은 루루");
        assert_eq!(normalize("hello world"), "hello world");
    }
}
