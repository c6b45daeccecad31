use std::collections::BTreeSet;

use regex::Regex;

use crate::error::{PipelineError, Result};
use crate::pipeline::{Token, TransformFn};

/// The alphabet a trimmer keeps. `generic` stands for the `\w` class; the
/// explicit characters are kept sorted and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordCharacters {
    generic: bool,
    chars: BTreeSet<char>,
}

impl WordCharacters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generic() -> Self {
        WordCharacters {
            generic: true,
            chars: BTreeSet::new(),
        }
    }

    /// Union of every character appearing in `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut word_characters = Self::new();
        word_characters.extend_from_words(words);
        word_characters
    }

    pub fn insert_generic(&mut self) {
        self.generic = true;
    }

    pub fn extend_from_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.chars.extend(word.as_ref().chars());
        }
    }

    pub fn merge(&mut self, other: &WordCharacters) {
        self.generic |= other.generic;
        self.chars.extend(other.chars.iter().copied());
    }

    pub fn is_generic(&self) -> bool {
        self.generic
    }

    pub fn is_empty(&self) -> bool {
        !self.generic && self.chars.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Whether a trimmer built from this alphabet keeps `c`.
    pub fn contains(&self, c: char) -> bool {
        (self.generic && is_generic_word_char(c)) || self.chars.contains(&c)
    }

    /// Body of a regex character class matching the alphabet.
    pub fn to_class(&self) -> String {
        let mut class = String::new();
        if self.generic {
            class.push_str(r"\w");
        }
        for c in &self.chars {
            class.push_str(&regex::escape(&c.to_string()));
        }
        class
    }
}

fn is_generic_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Builds the trimming stage for an alphabet.
pub trait TrimmerFactory: Send + Sync {
    fn build_trimmer(&self, word_characters: &WordCharacters) -> Result<TransformFn>;
}

/// Strips leading and trailing runs of characters outside the alphabet using
/// a pair of anchored regexes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexTrimmerFactory;

impl TrimmerFactory for RegexTrimmerFactory {
    fn build_trimmer(&self, word_characters: &WordCharacters) -> Result<TransformFn> {
        if word_characters.is_empty() {
            return Err(PipelineError::InvalidTrimmer(
                "no word characters to build a trimmer from".to_string(),
            ));
        }
        let class = word_characters.to_class();
        let start = Regex::new(&format!("^[^{}]+", class))
            .map_err(|e| PipelineError::InvalidTrimmer(e.to_string()))?;
        let end = Regex::new(&format!("[^{}]+$", class))
            .map_err(|e| PipelineError::InvalidTrimmer(e.to_string()))?;

        Ok(TransformFn::new(move |token: &Token, _: usize, _: &[Token]| {
            token.update(|text, _| {
                let trimmed = start.replace(text, "");
                end.replace(&trimmed, "").into_owned()
            })
        }))
    }
}

/// The default `\w` trimmer. Word characters are alphanumerics and `_`.
pub fn default_trimmer() -> TransformFn {
    TransformFn::new(|token: &Token, _: usize, _: &[Token]| {
        token.update(|text, _| text.trim_matches(|c: char| !is_generic_word_char(c)).to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trim(func: &TransformFn, text: &str) -> Vec<String> {
        func.call(&Token::new(text), 0, &[]).into_texts()
    }

    #[test]
    fn test_default_trimmer() {
        let trimmer = default_trimmer();
        assert_eq!(trim(&trimmer, "hello"), vec!["hello"]);
        assert_eq!(trim(&trimmer, "\"hello\","), vec!["hello"]);
        assert_eq!(trim(&trimmer, "it's"), vec!["it's"]);
        assert!(trim(&trimmer, "--").is_empty());
    }

    #[test]
    fn test_class_is_sorted_and_escaped() {
        let mut chars = WordCharacters::from_words(["ba", "a-"]);
        assert_eq!(chars.to_class(), r"\-ab");
        chars.insert_generic();
        assert_eq!(chars.to_class(), r"\w\-ab");
    }

    #[test]
    fn test_regex_trimmer_keeps_alphabet() -> Result<()> {
        let chars = WordCharacters::from_words(["été", "ça"]);
        let trimmer = RegexTrimmerFactory.build_trimmer(&chars)?;

        assert_eq!(trim(&trimmer, "«été»"), vec!["été"]);
        assert_eq!(trim(&trimmer, "(ça)"), vec!["ça"]);
        // 'x' is outside the alphabet, so the whole token goes
        assert!(trim(&trimmer, "xx").is_empty());
        Ok(())
    }

    #[test]
    fn test_generic_marker_in_regex() -> Result<()> {
        let mut chars = WordCharacters::generic();
        chars.extend_from_words(["ß"]);
        let trimmer = RegexTrimmerFactory.build_trimmer(&chars)?;
        assert_eq!(trim(&trimmer, "...straße!"), vec!["straße"]);
        Ok(())
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(matches!(
            RegexTrimmerFactory.build_trimmer(&WordCharacters::new()),
            Err(PipelineError::InvalidTrimmer(_))
        ));
    }
}
