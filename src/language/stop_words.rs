use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use log::debug;

use super::Language;
#[cfg(feature = "multi-language")]
use super::persian::PERSIAN_STOP_WORDS;
use crate::error::Result;
use crate::pipeline::{StageOutput, Token, TransformFn};

/// Supplies the stop-word list of a language.
pub trait StopWordSource: Send + Sync {
    fn is_available(&self) -> bool {
        true
    }

    fn stop_words(&self, language: Language) -> Result<HashSet<String>>;
}

/// Stop words from the `stop-words` corpus. Each language's list is loaded
/// once and cached for the lifetime of the source.
#[derive(Debug, Default)]
pub struct CorpusStopWords {
    cache: Mutex<HashMap<Language, Arc<HashSet<String>>>>,
}

impl CorpusStopWords {
    pub fn new() -> Self {
        Self::default()
    }

    fn cached(&self, language: Language) -> Result<Arc<HashSet<String>>> {
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(words) = cache.get(&language) {
            return Ok(Arc::clone(words));
        }
        let words = Arc::new(load_corpus(language)?);
        debug!("Loaded {} stop words for {}", words.len(), language.name());
        cache.insert(language, Arc::clone(&words));
        Ok(words)
    }
}

impl StopWordSource for CorpusStopWords {
    fn is_available(&self) -> bool {
        super::language_support()
    }

    fn stop_words(&self, language: Language) -> Result<HashSet<String>> {
        Ok(self.cached(language)?.as_ref().clone())
    }
}

#[cfg(feature = "multi-language")]
fn load_corpus(language: Language) -> Result<HashSet<String>> {
    use ::stop_words::LANGUAGE;

    let corpus = match language {
        Language::Persian => return Ok(PERSIAN_STOP_WORDS.clone()),
        Language::Arabic => LANGUAGE::Arabic,
        Language::Danish => LANGUAGE::Danish,
        Language::Dutch => LANGUAGE::Dutch,
        Language::English => LANGUAGE::English,
        Language::Finnish => LANGUAGE::Finnish,
        Language::French => LANGUAGE::French,
        Language::German => LANGUAGE::German,
        Language::Hungarian => LANGUAGE::Hungarian,
        Language::Italian => LANGUAGE::Italian,
        Language::Norwegian => LANGUAGE::Norwegian,
        Language::Portuguese => LANGUAGE::Portuguese,
        Language::Romanian => LANGUAGE::Romanian,
        Language::Russian => LANGUAGE::Russian,
        Language::Spanish => LANGUAGE::Spanish,
        Language::Swedish => LANGUAGE::Swedish,
    };
    Ok(::stop_words::get(corpus)
        .into_iter()
        .map(|s| s.to_string())
        .collect())
}

#[cfg(not(feature = "multi-language"))]
fn load_corpus(language: Language) -> Result<HashSet<String>> {
    Err(crate::error::PipelineError::LanguageSupportUnavailable(format!(
        "no stop-word corpus for {} (built without the multi-language feature)",
        language.name()
    )))
}

/// A stage dropping every token whose text is in `stop_words`.
pub fn stop_word_filter(stop_words: HashSet<String>) -> TransformFn {
    TransformFn::new(move |token: &Token, _: usize, _: &[Token]| {
        if token.is_empty() || stop_words.contains(token.as_str()) {
            StageOutput::Drop
        } else {
            StageOutput::Token(token.text.clone())
        }
    })
}

pub fn stop_word_filter_label(language: Option<Language>) -> String {
    match language {
        Some(language) => format!("stopWordFilter-{}", language.code()),
        None => crate::functions::STOP_WORD_FILTER_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_word_filter() {
        let filter = stop_word_filter(["the", "and"].iter().map(|s| s.to_string()).collect());
        assert!(filter.call(&Token::new("the"), 0, &[]).into_texts().is_empty());
        assert_eq!(filter.call(&Token::new("cat"), 0, &[]).into_texts(), vec!["cat"]);
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(stop_word_filter_label(None), "stopWordFilter");
        assert_eq!(stop_word_filter_label(Some(Language::French)), "stopWordFilter-fr");
    }

    #[cfg(feature = "multi-language")]
    #[test]
    fn test_corpus_is_cached() -> Result<()> {
        let corpus = CorpusStopWords::new();
        let french = corpus.stop_words(Language::French)?;
        assert!(french.contains("le"));
        assert_eq!(corpus.stop_words(Language::French)?, french);
        assert_eq!(corpus.cache.lock().map(|c| c.len()).unwrap_or(0), 1);
        Ok(())
    }

    #[cfg(feature = "multi-language")]
    #[test]
    fn test_persian_uses_builtin_list() -> Result<()> {
        let corpus = CorpusStopWords::new();
        assert_eq!(corpus.stop_words(Language::Persian)?, *PERSIAN_STOP_WORDS);
        Ok(())
    }
}
