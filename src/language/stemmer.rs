use std::fmt;

use rust_stemmers::Algorithm;

use crate::pipeline::{Token, TransformFn};

pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Snowball stemmer backed by `rust-stemmers`.
pub struct SnowballStemmer {
    stemmer: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(algorithm: Algorithm) -> Self {
        SnowballStemmer {
            stemmer: rust_stemmers::Stemmer::create(algorithm),
        }
    }

    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("stemmer", &"<stemmer>")
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).to_string()
    }
}

/// Wraps a stemmer as a pipeline stage.
pub fn stemmer_function<S: Stemmer + 'static>(stemmer: S) -> TransformFn {
    TransformFn::new(move |token: &Token, _: usize, _: &[Token]| {
        token.update(|word, _| stemmer.stem(word))
    })
}
