//! 문장 분리
//!
//! 종결 부호 덩어리(`.`, `!`, `?`, `…` 및 그 반복)와 뒤따르는 닫는 따옴표/괄호까지를
//! 문장 끝으로 봅니다. 단, 그 뒤가 공백이거나 텍스트 끝일 때만 자릅니다
//! (`3.14`, `www.a.com`은 자르지 않음).

use regex::Regex;
use std::sync::LazyLock;

use crate::core::Sentence;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?…。！？]+["'”’)\]」』]*"#).expect("sentence end pattern must compile")
});

/// 바이트 위치 -> 문자 위치 변환 (앞으로만 이동)
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn char_index(&mut self, byte: usize) -> usize {
        if byte > self.byte {
            self.chars += self.text[self.byte..byte].chars().count();
            self.byte = byte;
        }
        self.chars
    }
}

/// 텍스트를 문장 구간으로 분리
pub fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut cursor = CharCursor::new(text);
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        let boundary = text[m.end()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if !boundary {
            continue;
        }
        push_sentence(text, start, m.end(), &mut cursor, &mut sentences);
        start = m.end();
    }
    push_sentence(text, start, text.len(), &mut cursor, &mut sentences);

    sentences
}

/// [start, end) 바이트 구간을 양끝 공백을 제외하고 추가
fn push_sentence(
    text: &str,
    start: usize,
    end: usize,
    cursor: &mut CharCursor<'_>,
    out: &mut Vec<Sentence>,
) {
    let piece = &text[start..end];
    let trimmed = piece.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = piece.len() - piece.trim_start().len();
    let begin = cursor.char_index(start + lead);
    out.push(Sentence {
        text: trimmed.to_string(),
        start: begin,
        end: begin + trimmed.chars().count(),
    });
}
