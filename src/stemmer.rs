//! 어간 추출
//!
//! 동사/형용사 토큰을 기본형(-다)으로 바꾸고, 바로 뒤에 붙은
//! 어미/선어말어미 토큰을 흡수합니다.
//! `먹었(Verb) + 다(Eomi)` -> `먹다(Verb)`, 구간은 두 토큰을 합친 범위.

use crate::core::KoreanToken;
use crate::dictionary::Lexicon;
use crate::tokenizer::tokenize_with;

/// 토큰열 어간 추출 (품사는 바뀌지 않음)
pub fn stem(tokens: &[KoreanToken], lexicon: &Lexicon) -> Vec<KoreanToken> {
    let mut stemmed = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let citation = if token.pos.is_predicate() && !token.unknown {
            token
                .stem
                .clone()
                .or_else(|| lexicon.citation_of(&token.text, token.pos).map(str::to_string))
        } else {
            None
        };

        let Some(citation) = citation else {
            stemmed.push(token.clone());
            i += 1;
            continue;
        };

        // 이어 붙은 어미 흡수
        let mut end = token.end();
        let mut next = i + 1;
        while let Some(ending) = tokens.get(next) {
            if !ending.pos.is_ending() || ending.offset != end {
                break;
            }
            end = ending.end();
            next += 1;
        }

        stemmed.push(KoreanToken {
            text: citation.clone(),
            pos: token.pos,
            offset: token.offset,
            length: end - token.offset,
            unknown: false,
            stem: Some(citation),
        });
        i = next;
    }
    stemmed
}

/// 텍스트 어간 추출: 공백을 유지한 채 용언을 기본형으로 바꾼 문자열
pub fn stem_text(text: &str, lexicon: &Lexicon) -> String {
    stem(&tokenize_with(text, lexicon), lexicon)
        .iter()
        .map(|t| t.text.as_str())
        .collect()
}
