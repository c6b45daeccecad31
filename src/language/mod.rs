use std::fmt;

use log::debug;
use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::functions::FunctionRegistry;

pub mod bundler;
pub mod english;
#[cfg(feature = "multi-language")]
mod persian;
pub mod stemmer;
pub mod stop_words;
pub mod trimmer;

pub use self::bundler::{get_builder, Builder, LanguageBundler, PipelineSlots};
pub use self::stemmer::{stemmer_function, SnowballStemmer, Stemmer};
pub use self::stop_words::{stop_word_filter, CorpusStopWords, StopWordSource};
pub use self::trimmer::{RegexTrimmerFactory, TrimmerFactory, WordCharacters};

/// The language served by the builtin `trimmer`, `stopWordFilter` and
/// `stemmer` functions.
pub const DEFAULT_LANGUAGE: Language = Language::English;

/// Languages with stemming and stop-word support, keyed by ISO-639-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Hungarian,
    Italian,
    Norwegian,
    Persian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
}

impl Language {
    pub const ALL: [Language; 16] = [
        Language::Arabic,
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Hungarian,
        Language::Italian,
        Language::Norwegian,
        Language::Persian,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
    ];

    pub fn from_code(code: &str) -> Result<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.code() == code)
            .ok_or_else(|| PipelineError::UnsupportedLanguage(code.to_string()))
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Danish => "da",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::German => "de",
            Language::Hungarian => "hu",
            Language::Italian => "it",
            Language::Norwegian => "no",
            Language::Persian => "fa",
            Language::Portuguese => "pt",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swedish => "sv",
        }
    }

    /// Full name as understood by the stemming and stop-word corpora.
    /// Persian shares the arabic stemmer.
    pub fn name(self) -> &'static str {
        match self {
            Language::Arabic | Language::Persian => "arabic",
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Hungarian => "hungarian",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Romanian => "romanian",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
        }
    }

    pub fn algorithm(self) -> Algorithm {
        match self {
            Language::Arabic | Language::Persian => Algorithm::Arabic,
            Language::Danish => Algorithm::Danish,
            Language::Dutch => Algorithm::Dutch,
            Language::English => Algorithm::English,
            Language::Finnish => Algorithm::Finnish,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Hungarian => Algorithm::Hungarian,
            Language::Italian => Algorithm::Italian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Romanian => Algorithm::Romanian,
            Language::Russian => Algorithm::Russian,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
        }
    }

    pub fn is_default(self) -> bool {
        self == DEFAULT_LANGUAGE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<String> for Language {
    type Error = PipelineError;

    fn try_from(code: String) -> Result<Self> {
        Language::from_code(&code)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code().to_string()
    }
}

/// Parses language codes, dropping repeats but keeping first-seen order.
pub fn parse_languages<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Language>> {
    let mut languages = Vec::with_capacity(codes.len());
    for code in codes {
        let language = Language::from_code(code.as_ref())?;
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    Ok(languages)
}

/// Whether the stop-word corpus and non-default stemmers were compiled in.
pub fn language_support() -> bool {
    cfg!(feature = "multi-language")
}

pub fn stemmer_label(language: Language) -> String {
    format!("stemmer-{}", language.code())
}

/// Label of the merged trimmer for a set of languages. The codes are sorted so
/// the same set always maps to the same label.
pub fn multi_trimmer_label(languages: &[Language]) -> String {
    let mut codes: Vec<&str> = languages.iter().map(|l| l.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    format!("lunr-multi-trimmer-{}", codes.join("-"))
}

/// Registers `stemmer-<code>` for every non-default language in `languages`.
/// Must run before loading a serialized pipeline that refers to them.
pub fn register_languages(registry: &mut FunctionRegistry, languages: &[Language]) -> Result<()> {
    if languages.iter().any(|l| !l.is_default()) && !language_support() {
        return Err(PipelineError::LanguageSupportUnavailable(
            "built without the multi-language feature".to_string(),
        ));
    }
    for language in languages.iter().filter(|l| !l.is_default()) {
        let stemmer = stemmer_function(SnowballStemmer::new(language.algorithm()));
        registry.register(&stemmer, &stemmer_label(*language));
        debug!("Registered stemmer for {}", language.name());
    }
    Ok(())
}

/// Builds a registry holding the builtins plus the stemmers of `codes`.
pub fn init<S: AsRef<str>>(codes: &[S]) -> Result<FunctionRegistry> {
    let languages = parse_languages(codes)?;
    let mut registry = FunctionRegistry::with_builtins();
    register_languages(&mut registry, &languages)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() -> Result<()> {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code())?, language);
        }
        Ok(())
    }

    #[test]
    fn test_unsupported_code() {
        let err = Language::from_code("zz").unwrap_err();
        assert_eq!(err, PipelineError::UnsupportedLanguage("zz".to_string()));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_parse_languages_dedups_in_order() -> Result<()> {
        let languages = parse_languages(&["fr", "en", "fr", "de"])?;
        assert_eq!(
            languages,
            vec![Language::French, Language::English, Language::German]
        );
        Ok(())
    }

    #[test]
    fn test_multi_trimmer_label_is_sorted() {
        assert_eq!(
            multi_trimmer_label(&[Language::French, Language::English]),
            "lunr-multi-trimmer-en-fr"
        );
    }

    #[cfg(feature = "multi-language")]
    #[test]
    fn test_init_registers_stemmers() -> Result<()> {
        let registry = init(&["en", "fr", "ru"])?;
        assert!(registry.contains("stemmer-fr"));
        assert!(registry.contains("stemmer-ru"));
        assert!(!registry.contains("stemmer-en"));
        assert!(!registry.contains("stemmer-de"));
        Ok(())
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&vec![Language::German, Language::Persian]).unwrap();
        assert_eq!(json, r#"["de","fa"]"#);
        let parsed: Vec<Language> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![Language::German, Language::Persian]);
        assert!(serde_json::from_str::<Language>(r#""zz""#).is_err());
    }
}
