//! 한국어 처리기
//!
//! 설정과 공유 사전을 들고 정규화/토큰화/어간 추출/구 추출/문장 분리/복원을
//! 한곳에서 제공합니다. 모든 텍스트 연산은 실패하지 않습니다.

use crate::config::ProcessorConfig;
use crate::core::{KoreanPhrase, KoreanToken, Sentence};
use crate::detokenizer;
use crate::dictionary::KoreanDictionary;
use crate::normalizer;
use crate::phrase::PhraseExtractor;
use crate::sentence;
use crate::stemmer;
use crate::tokenizer::{remove_spaces, tokenize_with};

/// 처리기 (복제본은 같은 사전을 공유)
#[derive(Debug, Clone, Default)]
pub struct KoreanProcessor {
    config: ProcessorConfig,
    dictionary: KoreanDictionary,
    phrases: PhraseExtractor,
}

impl KoreanProcessor {
    /// 기본 설정 + 내장 사전
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// 이미 있는 사전을 공유하는 처리기
    pub fn with_dictionary(config: ProcessorConfig, dictionary: KoreanDictionary) -> Self {
        Self {
            config,
            dictionary,
            phrases: PhraseExtractor::new(),
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &KoreanDictionary {
        &self.dictionary
    }

    pub fn normalize(&self, text: &str) -> String {
        normalizer::normalize(text)
    }

    /// 설정대로 토큰화
    pub fn tokenize(&self, text: &str) -> Vec<KoreanToken> {
        self.tokenize_with_options(
            text,
            self.config.normalizer_enabled,
            self.config.stemmer_enabled,
            self.config.keep_space_enabled,
        )
    }

    /// 단계별 옵션을 직접 지정해 토큰화
    ///
    /// 정규화하면 오프셋은 정규화된 텍스트 기준입니다.
    pub fn tokenize_with_options(
        &self,
        text: &str,
        normalize: bool,
        stem: bool,
        keep_space: bool,
    ) -> Vec<KoreanToken> {
        let normalized;
        let text = if normalize {
            normalized = normalizer::normalize(text);
            normalized.as_str()
        } else {
            text
        };

        // 호출 하나는 사전 스냅샷 하나로 처리
        let lexicon = self.dictionary.snapshot();
        let mut tokens = tokenize_with(text, &lexicon);
        if stem {
            tokens = stemmer::stem(&tokens, &lexicon);
        }
        if !keep_space {
            tokens = remove_spaces(tokens);
        }
        tokens
    }

    /// 토큰 텍스트만
    pub fn tokenize_to_strings(
        &self,
        text: &str,
        normalize: bool,
        stem: bool,
        keep_space: bool,
    ) -> Vec<String> {
        self.tokenize_with_options(text, normalize, stem, keep_space)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    pub fn stem(&self, tokens: &[KoreanToken]) -> Vec<KoreanToken> {
        stemmer::stem(tokens, &self.dictionary.snapshot())
    }

    pub fn stem_text(&self, text: &str) -> String {
        stemmer::stem_text(text, &self.dictionary.snapshot())
    }

    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        sentence::split_sentences(text)
    }

    /// 설정의 스팸 필터/해시태그 옵션으로 구 추출
    pub fn extract_phrases(&self, tokens: &[KoreanToken]) -> Vec<KoreanPhrase> {
        self.extract_phrases_with_options(
            tokens,
            self.config.phrase_spam_filter_enabled,
            self.config.phrase_hashtags_enabled,
        )
    }

    pub fn extract_phrases_with_options(
        &self,
        tokens: &[KoreanToken],
        filter_spam: bool,
        include_hashtags: bool,
    ) -> Vec<KoreanPhrase> {
        self.phrases.extract(tokens, filter_spam, include_hashtags)
    }

    pub fn detokenize<S: AsRef<str>>(&self, words: &[S]) -> String {
        detokenizer::detokenize(words)
    }

    /// 사용자 명사 추가 (같은 사전을 쓰는 모든 처리기에 반영)
    pub fn add_nouns_to_dictionary<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary.add_nouns(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KoreanPos;

    #[test]
    fn test_tokenize_default_pipeline() {
        let processor = KoreanProcessor::new();
        let tokens = processor.tokenize("한국어를 처리하는 예시입니닼ㅋㅋㅋㅋㅋ");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        let tags: Vec<KoreanPos> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(texts, vec!["한국어", "를", "처리", "하다", "예시", "이다", "ㅋㅋ"]);
        assert_eq!(
            tags,
            vec![
                KoreanPos::Noun,
                KoreanPos::Josa,
                KoreanPos::Noun,
                KoreanPos::Verb,
                KoreanPos::Noun,
                KoreanPos::Adjective,
                KoreanPos::KoreanParticle,
            ]
        );
    }

    #[test]
    fn test_config_controls_pipeline() {
        let config = ProcessorConfig::default()
            .with_normalizer(false)
            .with_stemmer(false)
            .with_keep_space(true);
        let processor = KoreanProcessor::with_config(config);
        let texts: Vec<String> = processor
            .tokenize("먹었다 ㅋㅋㅋ")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["먹었", "다", " ", "ㅋㅋㅋ"]);
    }

    #[test]
    fn test_tokenize_to_strings_inverts_detokenize() {
        let processor = KoreanProcessor::new();
        let words = ["강아지", "가", "밥", "을", "먹었", "다"];
        let text = processor.detokenize(&words);
        assert_eq!(
            processor.tokenize_to_strings(&text, false, false, false),
            words.to_vec()
        );
    }

    #[test]
    fn test_extract_phrases_uses_config() {
        let text = "아름다운 트위터를 만들어 보자. 시발 #욕하지_말자";
        let plain = KoreanProcessor::new();
        let tokens = plain.tokenize_with_options(text, true, false, false);
        assert_eq!(plain.extract_phrases(&tokens).len(), 4);

        let filtered = KoreanProcessor::with_config(
            ProcessorConfig::default()
                .with_phrase_spam_filter(true)
                .with_phrase_hashtags(false),
        );
        let texts: Vec<String> = filtered
            .extract_phrases(&tokens)
            .into_iter()
            .map(|p| p.text)
            .collect();
        assert_eq!(texts, vec!["아름다운 트위터", "트위터"]);
    }

    #[test]
    fn test_shared_dictionary() {
        let dictionary = KoreanDictionary::new();
        let a = KoreanProcessor::with_dictionary(ProcessorConfig::default(), dictionary.clone());
        let b = KoreanProcessor::with_dictionary(ProcessorConfig::default(), dictionary);
        a.add_nouns_to_dictionary(["우햐나", "어가녀", "아뎌"]);
        assert_eq!(
            b.tokenize_to_strings("우햐나어가녀아뎌", true, true, false),
            vec!["우햐나", "어가녀", "아뎌"]
        );
    }

    #[test]
    fn test_stem_text() {
        let processor = KoreanProcessor::new();
        assert_eq!(processor.stem_text("귀여워서 먹었다"), "귀엽다 먹다");
    }
}
