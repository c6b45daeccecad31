use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::{parse_languages, Language};

/// Language setup of an index, usually read from YAML:
///
/// ```yaml
/// languages: [en, fr]
/// stop_words:
///   fr: [voilà]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    #[serde(default)]
    pub languages: Vec<String>,
    /// Extra stop words per language code, added to the corpus list.
    #[serde(default)]
    pub stop_words: HashMap<String, Vec<String>>,
}

impl LanguageConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let cfg: LanguageConfig = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn languages(&self) -> Result<Vec<Language>> {
        parse_languages(&self.languages)
    }

    fn validate(&self) -> Result<()> {
        self.languages()?;
        for code in self.stop_words.keys() {
            Language::from_code(code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;

    #[test]
    fn test_parse_yaml() -> Result<()> {
        let cfg = LanguageConfig::from_yaml_str("languages: [en, fr, en]\nstop_words:\n  fr: [voilà]\n")?;
        assert_eq!(cfg.languages()?, vec![Language::English, Language::French]);
        assert_eq!(cfg.stop_words["fr"], vec!["voilà".to_string()]);
        Ok(())
    }

    #[test]
    fn test_unsupported_language_in_config() {
        let err = LanguageConfig::from_yaml_str("languages: [en, zz]").unwrap_err();
        assert_eq!(err, PipelineError::UnsupportedLanguage("zz".to_string()));

        let err = LanguageConfig::from_yaml_str("stop_words:\n  xx: [a]").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = LanguageConfig::from_yaml_str("languages: {").unwrap_err();
        assert!(matches!(err, PipelineError::Configuration(_)));
    }
}
