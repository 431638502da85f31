//! 한글 청크 분해
//!
//! 청크를 (단어, 품사) 열로 나누는 최소 비용 경로 탐색입니다.
//! 상태는 (위치, 직전 품사)이고, 비용은 다음을 합산합니다.
//!
//! - 조각 하나당 1.0 (긴 사전 단어, 적은 조각 선호)
//! - 문법에 맞지 않는 품사 연결마다 2.5 (체언 뒤 조사, 용언 뒤 어미)
//! - 미등록 구간은 5.0 + 글자당 1.5 (명사처럼 연결)
//! - 동점은 품사 순위로 가름 (명사 우선)

use std::collections::HashMap;

use crate::core::{KoreanPos, KoreanToken};
use crate::dictionary::Lexicon;

const SEGMENT_COST: f64 = 1.0;
const INVALID_TRANSITION_COST: f64 = 2.5;
const UNKNOWN_BASE_COST: f64 = 5.0;
const UNKNOWN_CHAR_COST: f64 = 1.5;
const TIE_BREAK: f64 = 0.001;

/// 청크 중간의 미등록 구간 최대 길이 (청크 전체를 덮는 구간은 항상 허용)
const MAX_UNKNOWN_LEN: usize = 24;

/// 동점 처리용 품사 순위 (작을수록 우선)
fn pos_rank(pos: KoreanPos) -> f64 {
    let rank = match pos {
        KoreanPos::Noun => 0,
        KoreanPos::ProperNoun => 1,
        KoreanPos::Josa => 2,
        KoreanPos::Eomi => 3,
        KoreanPos::PreEomi => 4,
        KoreanPos::Suffix => 5,
        KoreanPos::Adverb => 6,
        KoreanPos::Determiner => 7,
        KoreanPos::Exclamation => 8,
        KoreanPos::Conjunction => 9,
        KoreanPos::Verb => 10,
        KoreanPos::Adjective => 11,
        KoreanPos::NounPrefix => 12,
        KoreanPos::VerbPrefix => 13,
        _ => 14,
    };
    rank as f64 * TIE_BREAK
}

/// 직전 품사 뒤에 올 수 있는지
fn is_valid_transition(prev: Option<KoreanPos>, next: KoreanPos) -> bool {
    match next {
        KoreanPos::Josa => matches!(
            prev,
            Some(p) if p.is_nominal()
                || matches!(p, KoreanPos::Josa | KoreanPos::Eomi | KoreanPos::Adverb)
        ),
        KoreanPos::Suffix => matches!(prev, Some(p) if p.is_nominal()),
        KoreanPos::Eomi | KoreanPos::PreEomi => matches!(
            prev,
            Some(KoreanPos::Verb | KoreanPos::Adjective | KoreanPos::PreEomi)
        ),
        _ => true,
    }
}

/// 경로의 한 조각
#[derive(Debug, Clone, Copy)]
struct Step {
    cost: f64,
    /// 조각 시작 위치
    start: usize,
    /// 시작 위치에서의 직전 품사 (역추적 키)
    prev: Option<KoreanPos>,
    pos: KoreanPos,
    unknown: bool,
}

/// 후보 조각: (길이, 품사, 미등록 여부)
fn candidates(chars: &[char], start: usize, lexicon: &Lexicon) -> Vec<(usize, KoreanPos, bool)> {
    let mut found: Vec<(usize, KoreanPos, bool)> = lexicon
        .words_at(chars, start)
        .into_iter()
        .flat_map(|(len, tags)| tags.iter().map(move |&pos| (len, pos, false)))
        .collect();

    let remaining = chars.len() - start;
    for len in 1..=remaining.min(MAX_UNKNOWN_LEN) {
        found.push((len, KoreanPos::Unknown, true));
    }
    if start == 0 && remaining > MAX_UNKNOWN_LEN {
        found.push((remaining, KoreanPos::Unknown, true));
    }
    found
}

/// 한글 청크를 토큰열로 분해 (항상 청크 전체를 덮음)
pub fn segment(chunk: &KoreanToken, lexicon: &Lexicon) -> Vec<KoreanToken> {
    let chars: Vec<char> = chunk.text.chars().collect();
    let n = chars.len();
    if n == 0 {
        return Vec::new();
    }

    // table[i]: 위치 i에 도달한 최선 경로, 직전 품사별
    let mut table: Vec<HashMap<Option<KoreanPos>, Step>> = vec![HashMap::new(); n + 1];
    table[0].insert(
        None,
        Step {
            cost: 0.0,
            start: 0,
            prev: None,
            pos: KoreanPos::Unknown,
            unknown: false,
        },
    );

    for i in 0..n {
        if table[i].is_empty() {
            continue;
        }
        let states: Vec<(Option<KoreanPos>, f64)> =
            table[i].iter().map(|(&key, step)| (key, step.cost)).collect();

        for (len, pos, unknown) in candidates(&chars, i, lexicon) {
            // 미등록어는 명사처럼 연결
            let effective = if unknown { KoreanPos::Noun } else { pos };
            let piece_cost = if unknown {
                UNKNOWN_BASE_COST + UNKNOWN_CHAR_COST * len as f64
            } else {
                SEGMENT_COST + pos_rank(pos)
            };

            for &(prev, base) in &states {
                let mut cost = base + piece_cost;
                if !is_valid_transition(prev, effective) {
                    cost += INVALID_TRANSITION_COST;
                }
                let key = Some(effective);
                let slot = &mut table[i + len];
                let better = slot.get(&key).map_or(true, |old| cost < old.cost);
                if better {
                    slot.insert(
                        key,
                        Step {
                            cost,
                            start: i,
                            prev,
                            pos,
                            unknown,
                        },
                    );
                }
            }
        }
    }

    // 최소 비용 종료 상태에서 역추적
    let Some((mut key, _)) = table[n]
        .iter()
        .min_by(|a, b| a.1.cost.total_cmp(&b.1.cost))
        .map(|(&key, step)| (key, *step))
    else {
        return vec![unknown_token(chunk)];
    };

    let mut pieces = Vec::new();
    let mut end = n;
    while end > 0 {
        let Some(step) = table[end].get(&key).copied() else {
            return vec![unknown_token(chunk)];
        };
        pieces.push((step.start, end, step.pos, step.unknown));
        key = step.prev;
        end = step.start;
    }
    pieces.reverse();

    pieces
        .into_iter()
        .map(|(start, end, pos, unknown)| {
            let text: String = chars[start..end].iter().collect();
            if unknown {
                log::trace!("미등록어: {}", text);
            }
            KoreanToken::new(text, pos, chunk.offset + start).with_unknown(unknown)
        })
        .collect()
}

fn unknown_token(chunk: &KoreanToken) -> KoreanToken {
    KoreanToken::new(chunk.text.clone(), KoreanPos::Unknown, chunk.offset).with_unknown(true)
}
