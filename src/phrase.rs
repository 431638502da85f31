//! 명사구 추출
//!
//! 패턴: (수식어 공백?)* (체언)+
//! - 체언: 명사, 고유명사, 접미사, 미등록어
//! - 수식어: 관형사, 체언 접두사, 관형형 용언(ㄴ/ㄹ 받침: 아름다운, 하는, 갈)
//!
//! 공백은 수식어 바로 뒤에서만 구를 잇습니다.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::unicode::{jongseong_of, JONG_NIEUN, JONG_RIEUL};
use crate::core::{KoreanPhrase, KoreanPos, KoreanToken};

/// 구 하나의 최대 토큰 수
const DEFAULT_MAX_TOKENS: usize = 8;

/// 스팸 필터에서 제외할 속어/욕설
pub static SPAM_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "시발", "씨발", "존나", "병신", "개새끼", "새끼", "지랄", "좆", "썅", "미친놈", "섹스",
        "야동", "대출", "카지노", "바카라", "토토",
    ] {
        set.insert(w);
    }
    set
});

fn is_nominal(token: &KoreanToken) -> bool {
    token.unknown || token.pos.is_nominal()
}

/// 관형형 용언 또는 관형사류
fn is_modifier(token: &KoreanToken) -> bool {
    match token.pos {
        KoreanPos::Determiner | KoreanPos::NounPrefix => true,
        KoreanPos::Verb | KoreanPos::Adjective => token
            .text
            .chars()
            .last()
            .and_then(jongseong_of)
            .is_some_and(|jong| jong == JONG_NIEUN || jong == JONG_RIEUL),
        _ => false,
    }
}

/// 명사구 추출기
#[derive(Debug, Clone)]
pub struct PhraseExtractor {
    max_tokens: usize,
}

impl Default for PhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseExtractor {
    pub fn new() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// 구 하나의 최대 토큰 수 설정 (최소 1)
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens.max(1);
        self
    }

    /// 구 추출
    ///
    /// 순서: 각 구간의 최대 구(등장 순) -> 여러 토큰 구 안의 단일 체언(등장 순) -> 해시태그.
    /// (text, offset) 기준 중복 제거.
    pub fn extract(
        &self,
        tokens: &[KoreanToken],
        filter_spam: bool,
        include_hashtags: bool,
    ) -> Vec<KoreanPhrase> {
        let runs = self.collect_runs(tokens);

        let mut phrases = Vec::new();
        for run in &runs {
            phrases.push(join_run(run));
        }
        for run in runs.iter().filter(|run| run.len() > 1) {
            let singles = run
                .iter()
                .filter(|t| is_nominal(t) && t.pos != KoreanPos::Suffix);
            for token in singles {
                phrases.push(KoreanPhrase::new(token.text.clone(), KoreanPos::Noun, token.offset));
            }
        }

        if filter_spam {
            phrases.retain(|p| !is_spam(p));
        }

        if include_hashtags {
            phrases.extend(
                tokens
                    .iter()
                    .filter(|t| t.pos == KoreanPos::Hashtag)
                    .map(|t| KoreanPhrase::new(t.text.clone(), KoreanPos::Hashtag, t.offset)),
            );
        }

        let mut seen = HashSet::new();
        phrases.retain(|p| seen.insert((p.text.clone(), p.offset)));
        phrases
    }

    /// 수식어/체언 구간 수집 (끝의 수식어는 버림, 체언 없는 구간 제외)
    fn collect_runs<'a>(&self, tokens: &'a [KoreanToken]) -> Vec<Vec<&'a KoreanToken>> {
        let mut runs = Vec::new();
        let mut current: Vec<&KoreanToken> = Vec::new();

        for token in tokens {
            if token.pos == KoreanPos::Space {
                continue;
            }
            let nominal = is_nominal(token);
            if !nominal && !is_modifier(token) {
                close_run(&mut current, &mut runs);
                continue;
            }

            // 공백은 수식어 뒤에서만 허용
            let split = current.last().is_some_and(|last| {
                token.offset > last.end() && !is_modifier(last)
            });
            if split || current.len() >= self.max_tokens {
                close_run(&mut current, &mut runs);
            }
            current.push(token);
        }
        close_run(&mut current, &mut runs);
        runs
    }
}

fn close_run<'a>(current: &mut Vec<&'a KoreanToken>, runs: &mut Vec<Vec<&'a KoreanToken>>) {
    while current.last().is_some_and(|t| !is_nominal(t)) {
        current.pop();
    }
    let run = std::mem::take(current);
    // 접미사만으로는 구가 되지 않음
    if run.iter().any(|t| is_nominal(t) && t.pos != KoreanPos::Suffix) {
        runs.push(run);
    }
}

/// 구간을 원문 간격대로 이어 붙임 (빠진 공백 자리는 공백으로 채움)
fn join_run(run: &[&KoreanToken]) -> KoreanPhrase {
    let mut text = String::new();
    let mut cursor = run.first().map_or(0, |t| t.offset);
    for token in run {
        for _ in cursor..token.offset {
            text.push(' ');
        }
        text.push_str(&token.text);
        cursor = token.end();
    }
    KoreanPhrase::new(text, KoreanPos::Noun, run.first().map_or(0, |t| t.offset))
}

fn is_spam(phrase: &KoreanPhrase) -> bool {
    phrase.length <= 1 || SPAM_NOUNS.iter().any(|w| phrase.text.contains(w))
}

/// 기본 설정으로 구 추출
pub fn extract_phrases(
    tokens: &[KoreanToken],
    filter_spam: bool,
    include_hashtags: bool,
) -> Vec<KoreanPhrase> {
    PhraseExtractor::new().extract(tokens, filter_spam, include_hashtags)
}
