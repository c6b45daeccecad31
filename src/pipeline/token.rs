use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit of text flowing through a pipeline, with the metadata the upstream
/// tokenizer attached to it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub position: usize,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            position: 0,
            metadata: HashMap::new(),
        }
    }

    pub fn with_position(text: impl Into<String>, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Derives a new token whose text is produced by `f`. Position and
    /// metadata are carried over unchanged.
    pub fn update<F>(&self, f: F) -> Token
    where
        F: FnOnce(&str, &HashMap<String, String>) -> String,
    {
        self.with_text(f(&self.text, &self.metadata))
    }

    pub fn with_text(&self, text: impl Into<String>) -> Token {
        Token {
            text: text.into(),
            position: self.position,
            metadata: self.metadata.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Token::new(text)
    }
}
