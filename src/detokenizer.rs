//! 토큰열 -> 자연스러운 띄어쓰기 문자열
//!
//! 조사/어미류 조각은 앞 단어에 붙이고 나머지는 공백 하나로 잇습니다.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::dictionary::lexicon::{EOMI, JOSA, PRE_EOMI};

/// 앞 단어에 붙는 조각
static ATTACHING: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for table in [JOSA, EOMI, PRE_EOMI] {
        for &w in table {
            set.insert(w);
        }
    }
    // 하- 파생, 보조 용언
    for w in [
        "하", "하게", "하는", "하고", "하다", "해", "해서", "했", "했다", "합니다", "있",
        "있다", "있는", "없", "없다", "없는", "는", "던",
    ] {
        set.insert(w);
    }
    set
});

/// 단어열을 띄어쓰기를 복원한 문자열로 합침
pub fn detokenize<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if word.is_empty() {
            continue;
        }
        if i > 0 && !out.is_empty() && !ATTACHING.contains(word) {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
