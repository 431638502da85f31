//! 사전 저장소
//!
//! 읽기가 대부분인 공유 사전입니다. 갱신은 copy-on-write로 처리합니다:
//! 쓰기는 현재 어휘를 복제해 수정한 뒤 `Arc`를 통째로 교체하고,
//! 읽기는 호출마다 스냅샷 `Arc` 하나를 잡고 작업합니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::core::KoreanPos;
use crate::error::KoreanTextError;

use super::conjugation::{conjugate, stem_class};
use super::lexicon::{predicate_tables, word_tables, IRREGULAR_BIEUP, IRREGULAR_HIEUH};
use super::trie::PrefixTrie;

/// 불변 어휘 스냅샷
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// 표면형 -> 허용 품사
    entries: HashMap<String, Vec<KoreanPos>>,
    /// (용언 표면형, 품사) -> 기본형
    citations: HashMap<(String, KoreanPos), String>,
    /// 위치별 단어 탐색용
    prefixes: PrefixTrie,
    /// 가장 긴 단어 길이 (문자 수)
    max_len: usize,
}

impl Lexicon {
    /// 내장 어휘로 생성
    pub fn bundled() -> Self {
        let mut lexicon = Self::default();
        for (pos, words) in word_tables() {
            for word in words {
                lexicon.insert(word, pos);
            }
        }
        for (pos, citations) in predicate_tables() {
            for citation in citations {
                lexicon.insert_predicate(citation, pos);
            }
        }
        log::debug!(
            "내장 사전 생성: 표면형 {}개, 용언 활용형 {}개",
            lexicon.entries.len(),
            lexicon.citations.len()
        );
        lexicon
    }

    /// 단어 추가 (새 (단어, 품사) 조합이면 true)
    fn insert(&mut self, word: &str, pos: KoreanPos) -> bool {
        let tags = self.entries.entry(word.to_string()).or_default();
        if tags.contains(&pos) {
            return false;
        }
        let first = tags.is_empty();
        tags.push(pos);
        tags.sort();
        if first {
            self.prefixes.insert(word);
        }
        self.max_len = self.max_len.max(word.chars().count());
        true
    }

    /// 용언 기본형과 모든 활용형 추가
    fn insert_predicate(&mut self, citation: &str, pos: KoreanPos) -> bool {
        let class = stem_class(
            citation,
            IRREGULAR_BIEUP.contains(citation),
            IRREGULAR_HIEUH.contains(citation),
        );
        let mut added = false;
        for surface in conjugate(citation, class) {
            added |= self.insert(&surface, pos);
            self.citations
                .entry((surface, pos))
                .or_insert_with(|| citation.to_string());
        }
        added
    }

    /// 단어의 허용 품사 (없으면 빈 슬라이스)
    pub fn pos_of(&self, word: &str) -> &[KoreanPos] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// 용언 표면형의 기본형 (받은 -> 받다)
    pub fn citation_of(&self, surface: &str, pos: KoreanPos) -> Option<&str> {
        self.citations
            .get(&(surface.to_string(), pos))
            .map(String::as_str)
    }

    pub fn max_word_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `start` 위치에서 시작하는 모든 사전 단어
    /// 반환: (문자 길이, 허용 품사), 짧은 것부터
    pub fn words_at(&self, chars: &[char], start: usize) -> Vec<(usize, &[KoreanPos])> {
        let rest = chars.get(start..).unwrap_or(&[]);
        self.prefixes
            .prefix_lengths(rest)
            .into_iter()
            .filter_map(|len| {
                let word: String = rest[..len].iter().collect();
                self.entries.get(&word).map(|tags| (len, tags.as_slice()))
            })
            .collect()
    }

    /// 가장 긴 사전 단어 길이 (없으면 None)
    pub fn longest_prefix(&self, chars: &[char], start: usize) -> Option<usize> {
        self.words_at(chars, start).last().map(|&(len, _)| len)
    }
}

static BUNDLED: LazyLock<Arc<Lexicon>> = LazyLock::new(|| Arc::new(Lexicon::bundled()));

/// 한국어 사전 서비스
///
/// 복제본끼리는 같은 저장소를 공유하므로, 한 곳에서 추가한 단어는
/// 이후 모든 복제본의 조회에 반영됩니다.
#[derive(Debug, Clone)]
pub struct KoreanDictionary {
    lexicon: Arc<RwLock<Arc<Lexicon>>>,
}

impl Default for KoreanDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl KoreanDictionary {
    /// 내장 어휘로 사전 생성
    pub fn new() -> Self {
        Self::from_lexicon(Arc::clone(&BUNDLED))
    }

    /// 빈 사전 생성
    pub fn empty() -> Self {
        Self::from_lexicon(Arc::new(Lexicon::default()))
    }

    fn from_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon: Arc::new(RwLock::new(lexicon)),
        }
    }

    /// 현재 어휘 스냅샷
    pub fn snapshot(&self) -> Arc<Lexicon> {
        let guard = self.lexicon.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// 사용자 명사 추가 (공백이 포함된 단어는 무시)
    /// 반환: 새로 추가된 단어 수
    pub fn add_nouns<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_words(words, KoreanPos::Noun)
    }

    /// 지정 품사로 단어 추가
    /// 동사/형용사는 기본형(-다)으로 받아 활용형까지 등록합니다.
    pub fn add_words<I, S>(&self, words: I, pos: KoreanPos) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !pos.is_word_level() {
            log::warn!("사전에 추가할 수 없는 품사: {}", pos);
            return 0;
        }

        let accepted: Vec<String> = words
            .into_iter()
            .filter_map(|w| {
                let word = w.as_ref();
                if word.is_empty() {
                    None
                } else if word.contains(char::is_whitespace) {
                    log::debug!("공백이 포함된 단어 무시: {:?}", word);
                    None
                } else {
                    Some(word.to_string())
                }
            })
            .collect();
        if accepted.is_empty() {
            return 0;
        }

        let mut guard = self.lexicon.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Lexicon::clone(&guard);
        let mut added = 0;
        for word in &accepted {
            let inserted = if pos.is_predicate() && word.ends_with('다') {
                next.insert_predicate(word, pos)
            } else {
                next.insert(word, pos)
            };
            if inserted {
                added += 1;
            }
        }
        *guard = Arc::new(next);

        log::debug!("사전에 {} {}개 추가", pos, added);
        added
    }

    /// 사용자 사전 JSON 파일 로드
    ///
    /// # 파일 형식
    /// ```json
    /// { "Noun": ["우햐나", "어가녀"], "Verb": ["트윗하다"] }
    /// ```
    pub fn load_user_dictionary(&self, path: impl AsRef<Path>) -> Result<usize, KoreanTextError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        self.load_user_value(&value)
    }

    /// 사용자 사전 JSON 문자열 로드
    pub fn load_user_dictionary_str(&self, json: &str) -> Result<usize, KoreanTextError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        self.load_user_value(&value)
    }

    fn load_user_value(&self, value: &serde_json::Value) -> Result<usize, KoreanTextError> {
        let object = value
            .as_object()
            .ok_or_else(|| KoreanTextError::FormatError("최상위가 객체가 아닙니다".into()))?;

        // 먼저 전부 검증한 뒤 추가 (부분 적용 방지)
        let mut batches = Vec::with_capacity(object.len());
        for (key, words) in object {
            let pos: KoreanPos = key
                .parse()
                .map_err(|e| KoreanTextError::FormatError(format!("{}", e)))?;
            let words = words
                .as_array()
                .ok_or_else(|| KoreanTextError::FormatError(format!("{}: 배열이 아닙니다", key)))?
                .iter()
                .map(|w| {
                    w.as_str().map(str::to_string).ok_or_else(|| {
                        KoreanTextError::FormatError(format!("{}: 문자열이 아닌 항목", key))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            batches.push((pos, words));
        }

        Ok(batches
            .into_iter()
            .map(|(pos, words)| self.add_words(words, pos))
            .sum())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.snapshot().contains(word)
    }

    pub fn pos_of(&self, word: &str) -> Vec<KoreanPos> {
        self.snapshot().pos_of(word).to_vec()
    }

    pub fn citation_of(&self, surface: &str, pos: KoreanPos) -> Option<String> {
        self.snapshot().citation_of(surface, pos).map(str::to_string)
    }
}
