//! 기본 내장 어휘 데이터
//!
//! 품사별 단어 목록입니다. 동사/형용사는 기본형(-다)으로 적고,
//! 활용형은 사전 생성 시 `conjugation` 모듈이 펼칩니다.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::KoreanPos;

#[rustfmt::skip]
pub const NOUNS: &[&str] = &[
    // 일상
    "사람", "남자", "여자", "아이", "어른", "친구", "가족", "엄마", "아빠", "동생",
    "언니", "오빠", "누나", "형", "선생님", "학생", "나", "너", "우리", "저희",
    "강아지", "고양이", "동물", "나무", "꽃", "하늘", "바다", "강산", "산", "강",
    "눈", "비", "바람", "날씨", "가을", "겨울", "봄", "여름", "아침", "점심",
    "저녁", "오늘", "내일", "어제", "시간", "때", "것", "수", "일", "말",
    "밥", "물", "집", "학교", "대학교", "회사", "책", "커피", "음악", "노래",
    "영화", "사진", "선물", "여행", "공부", "사랑", "마음", "생각", "문제", "세상",
    "나라", "코트", "버스", "전화", "핸드폰", "메시지", "평온", "루루", "예시", "처리",
    // 언어/기술
    "한국어", "한국", "영어", "언어", "텍스트", "형태소", "분석", "사전", "단어", "문장",
    "트위터", "인터넷", "컴퓨터", "정보", "데이터", "기술", "과학", "역사", "문화", "사회",
    "경제", "정치", "뉴스", "자연", "처리기", "토큰", "검색", "결과", "시스템", "프로그램",
    // 속어
    "시발", "씨발", "존나", "병신",
];

#[rustfmt::skip]
pub const PROPER_NOUNS: &[&str] = &[
    "서울", "부산", "대한민국", "제주", "버버리",
];

#[rustfmt::skip]
pub const JOSA: &[&str] = &[
    "이", "가", "을", "를", "은", "는", "의", "에", "에서", "에게",
    "한테", "께", "께서", "로", "으로", "와", "과", "도", "만", "까지",
    "부터", "처럼", "보다", "같이", "랑", "이랑", "야", "아", "요", "이나",
    "나", "든지", "마저", "조차", "밖에", "에는", "에서는", "으로는", "라고", "이라고",
];

#[rustfmt::skip]
pub const EOMI: &[&str] = &[
    "다", "니다", "습니다", "니까", "습니까", "고", "지", "게", "면", "으면",
    "며", "으며", "러", "으러", "자", "서", "도", "요", "죠", "네",
    "네요", "니", "냐", "는데", "은데", "지만", "면서", "으면서", "기", "어",
    "아", "어서", "아서", "어요", "아요", "라", "으니", "군요", "구나", "는다",
    "잖아", "거든", "세요", "으세요",
];

#[rustfmt::skip]
pub const PRE_EOMI: &[&str] = &[
    "었", "았", "였", "겠", "시", "셨", "으시", "으셨", "었었", "았었",
];

#[rustfmt::skip]
pub const SUFFIXES: &[&str] = &[
    "상", "들", "님", "씨", "적", "화", "성", "용", "쯤", "별",
];

#[rustfmt::skip]
pub const NOUN_PREFIXES: &[&str] = &[
    "왕", "초", "재", "무", "불", "비",
];

#[rustfmt::skip]
pub const ADVERBS: &[&str] = &[
    "늘", "잘", "안", "못", "더", "너무", "정말", "진짜", "아주", "매우",
    "많이", "빨리", "다시", "이미", "아직", "벌써", "항상", "가끔", "자주", "함께",
    "조금", "좀", "왜", "어떻게", "그냥", "바로", "제일", "가장", "꼭", "또",
    "이제", "지금", "오래",
];

#[rustfmt::skip]
pub const DETERMINERS: &[&str] = &[
    "이", "그", "저", "한", "두", "세", "네", "모든", "어떤", "무슨",
    "새", "각", "몇", "여러", "이런", "그런", "저런",
];

#[rustfmt::skip]
pub const EXCLAMATIONS: &[&str] = &[
    "아", "오", "와", "예", "응", "어머", "헐", "아이고", "우와",
];

#[rustfmt::skip]
pub const CONJUNCTIONS: &[&str] = &[
    "그리고", "그러나", "그래서", "하지만", "그런데", "또는", "및", "그러면", "그래도",
];

#[rustfmt::skip]
pub const VERBS: &[&str] = &[
    "하다", "되다", "가다", "오다", "보다", "주다", "먹다", "받다", "만들다", "살다",
    "알다", "놀다", "사다", "타다", "자다", "쓰다", "읽다", "말하다", "좋아하다", "사랑하다",
    "공부하다", "생각하다", "시작하다", "마시다", "기다리다", "배우다", "가르치다", "보내다", "눕다", "찾다",
    "놓다", "앉다", "씻다", "달리다", "웃다", "울다", "팔다", "열다", "닫다", "버리다",
    "나오다", "들어가다", "일어나다", "끝나다", "치다", "지나다", "죽다", "잡다", "믿다", "느끼다",
];

#[rustfmt::skip]
pub const ADJECTIVES: &[&str] = &[
    "이다", "있다", "없다", "같다", "아름답다", "귀엽다", "착하다", "좋다", "나쁘다", "크다",
    "작다", "많다", "적다", "높다", "낮다", "길다", "멀다", "예쁘다", "기쁘다", "슬프다",
    "바쁘다", "아프다", "고프다", "힘들다", "그렇다", "이렇다", "저렇다", "어떻다", "파랗다", "빨갛다",
    "새롭다", "즐겁다", "어렵다", "쉽다", "춥다", "덥다", "반갑다", "고맙다", "무섭다", "맛있다",
    "재미있다", "행복하다", "깨끗하다", "조용하다", "따뜻하다", "시원하다", "느리다", "싫다", "괜찮다", "짧다",
    "넓다", "좁다", "젊다", "밝다", "어둡다", "가볍다", "무겁다", "뜨겁다", "차갑다",
];

/// ㅂ 불규칙 용언 (아름답다 -> 아름다운, 아름다워)
pub static IRREGULAR_BIEUP: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in ["아름답다", "귀엽다", "눕다", "새롭다", "즐겁다", "어렵다", "쉽다", "춥다", "덥다",
              "반갑다", "고맙다", "무섭다", "어둡다", "가볍다", "무겁다", "뜨겁다", "차갑다"] {
        set.insert(w);
    }
    set
});

/// ㅎ 불규칙 용언 (그렇다 -> 그런, 그래)
pub static IRREGULAR_HIEUH: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in ["그렇다", "이렇다", "저렇다", "어떻다", "파랗다", "빨갛다"] {
        set.insert(w);
    }
    set
});

/// 품사별 내장 목록 (용언 제외)
pub fn word_tables() -> [(KoreanPos, &'static [&'static str]); 11] {
    [
        (KoreanPos::Noun, NOUNS),
        (KoreanPos::ProperNoun, PROPER_NOUNS),
        (KoreanPos::Josa, JOSA),
        (KoreanPos::Eomi, EOMI),
        (KoreanPos::PreEomi, PRE_EOMI),
        (KoreanPos::Suffix, SUFFIXES),
        (KoreanPos::NounPrefix, NOUN_PREFIXES),
        (KoreanPos::Adverb, ADVERBS),
        (KoreanPos::Determiner, DETERMINERS),
        (KoreanPos::Exclamation, EXCLAMATIONS),
        (KoreanPos::Conjunction, CONJUNCTIONS),
    ]
}

/// 용언 목록 (기본형)
pub fn predicate_tables() -> [(KoreanPos, &'static [&'static str]); 2] {
    [(KoreanPos::Verb, VERBS), (KoreanPos::Adjective, ADJECTIVES)]
}
