use crate::functions::FunctionRegistry;
use crate::language::english::ENGLISH_STOP_WORDS;
use crate::language::stemmer::{stemmer_function, SnowballStemmer};
use crate::language::stop_words::stop_word_filter;
use crate::language::trimmer::default_trimmer;

pub const TRIMMER_LABEL: &str = "trimmer";
pub const STOP_WORD_FILTER_LABEL: &str = "stopWordFilter";
pub const STEMMER_LABEL: &str = "stemmer";

/// Registers the default-language functions every index can rely on.
pub fn register_builtins(registry: &mut FunctionRegistry) {
    registry.register(&default_trimmer(), TRIMMER_LABEL);
    registry.register(&stop_word_filter(ENGLISH_STOP_WORDS.clone()), STOP_WORD_FILTER_LABEL);
    registry.register(&stemmer_function(SnowballStemmer::english()), STEMMER_LABEL);
}
