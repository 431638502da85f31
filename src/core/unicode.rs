//! 유니코드 한글 조합/분해 유틸리티
//!
//! 활용형 생성(어간 + 어미)과 정규화(종성 분리)에서 쓰는
//! 음절 단위 연산을 모아둔 모듈입니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 호환용 자모 범위 (ㄱ ~ ㅣ)
const COMPAT_JAMO_FIRST: u32 = 0x3131;
const COMPAT_JAMO_LAST: u32 = 0x3163;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 종성 인덱스
pub const JONG_NONE: u32 = 0;
pub const JONG_NIEUN: u32 = 4;
pub const JONG_RIEUL: u32 = 8;
pub const JONG_BIEUP: u32 = 17;
pub const JONG_SSANGSIOS: u32 = 20;
pub const JONG_KIEUK: u32 = 24;
pub const JONG_HIEUH: u32 = 27;

/// 중성 인덱스
pub const JUNG_A: u32 = 0;
pub const JUNG_AE: u32 = 1;
pub const JUNG_EO: u32 = 4;
pub const JUNG_E: u32 = 5;
pub const JUNG_YEO: u32 = 6;
pub const JUNG_O: u32 = 8;
pub const JUNG_WAE: u32 = 10;
pub const JUNG_OE: u32 = 11;
pub const JUNG_U: u32 = 13;
pub const JUNG_EU: u32 = 18;
pub const JUNG_I: u32 = 20;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글 음절 여부 (가 ~ 힣)
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자모 여부 (ㅋ, ㅎ, ㅠ 등 낱자)
pub fn is_compat_jamo(c: char) -> bool {
    (COMPAT_JAMO_FIRST..=COMPAT_JAMO_LAST).contains(&(c as u32))
}

/// 음절의 종성 인덱스 (한글 음절이 아니면 None)
pub fn jongseong_of(c: char) -> Option<u32> {
    decompose_syllable(c).map(|(_, _, jong)| jong)
}

/// 음절의 중성 인덱스
pub fn jungseong_of(c: char) -> Option<u32> {
    decompose_syllable(c).map(|(_, jung, _)| jung)
}

/// 종성만 바꾼 음절 반환
/// 예: ('하', ㄴ) -> '한', ('닼', 없음) -> '다'
pub fn with_jongseong(c: char, jong: u32) -> Option<char> {
    let (cho, jung, _) = decompose_syllable(c)?;
    compose_syllable(cho, jung, jong)
}

/// 중성만 바꾼 음절 반환 (종성은 유지)
pub fn with_jungseong(c: char, jung: u32) -> Option<char> {
    let (cho, _, jong) = decompose_syllable(c)?;
    compose_syllable(cho, jung, jong)
}

/// 종성이 있는 음절인지
pub fn has_jongseong(c: char) -> bool {
    matches!(jongseong_of(c), Some(jong) if jong != JONG_NONE)
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (실패 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}

/// 초성 인덱스에 해당하는 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    #[rustfmt::skip]
    const JAMO_CODES: [u32; 19] = [
        0x3131, // ㄱ
        0x3132, // ㄲ
        0x3134, // ㄴ
        0x3137, // ㄷ
        0x3138, // ㄸ
        0x3139, // ㄹ
        0x3141, // ㅁ
        0x3142, // ㅂ
        0x3143, // ㅃ
        0x3145, // ㅅ
        0x3146, // ㅆ
        0x3147, // ㅇ
        0x3148, // ㅈ
        0x3149, // ㅉ
        0x314A, // ㅊ
        0x314B, // ㅋ
        0x314C, // ㅌ
        0x314D, // ㅍ
        0x314E, // ㅎ
    ];
    JAMO_CODES.get(cho as usize).and_then(|&code| char::from_u32(code))
}

/// 종성을 호환용 자모 문자로 변환 (겹받침은 None)
/// 예: ㅋ(24) -> 'ㅋ'
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    jongseong_to_choseong(jong).and_then(choseong_to_jamo_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(19, 0, 0), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('닼'), Some((3, 0, 24)));
        assert_eq!(decompose_syllable('ㅋ'), None);
        assert_eq!(decompose_syllable('a'), None);
    }

    #[test]
    fn test_character_classes() {
        assert!(is_hangul_syllable('힣'));
        assert!(!is_hangul_syllable('ㅋ'));
        assert!(is_compat_jamo('ㅋ'));
        assert!(is_compat_jamo('ㅠ'));
        assert!(!is_compat_jamo('가'));
    }

    #[test]
    fn test_with_jongseong() {
        assert_eq!(with_jongseong('하', JONG_NIEUN), Some('한'));
        assert_eq!(with_jongseong('닼', JONG_NONE), Some('다'));
        assert_eq!(with_jongseong('어', JONG_SSANGSIOS), Some('었'));
        assert_eq!(with_jongseong('a', JONG_NIEUN), None);
    }

    #[test]
    fn test_with_jungseong() {
        // 보 + ㅘ = 봐
        assert_eq!(with_jungseong('보', 9), Some('봐'));
        assert_eq!(with_jungseong('이', JUNG_YEO), Some('여'));
    }

    #[test]
    fn test_has_jongseong() {
        assert!(has_jongseong('먹'));
        assert!(!has_jongseong('가'));
        assert!(!has_jongseong('!'));
    }

    #[test]
    fn test_combine_jungseong() {
        assert_eq!(combine_jungseong(8, 0), Some(9)); // ㅗ + ㅏ = ㅘ
        assert_eq!(combine_jungseong(13, 4), Some(14)); // ㅜ + ㅓ = ㅝ
        assert_eq!(combine_jungseong(0, 0), None);
    }

    #[test]
    fn test_jongseong_to_jamo_char() {
        assert_eq!(jongseong_to_jamo_char(JONG_KIEUK), Some('ㅋ'));
        assert_eq!(jongseong_to_jamo_char(JONG_HIEUH), Some('ㅎ'));
        // 겹받침은 변환 불가
        assert_eq!(jongseong_to_jamo_char(3), None);
        assert_eq!(jongseong_to_jamo_char(JONG_NONE), None);
    }
}
