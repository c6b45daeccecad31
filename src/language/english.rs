use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Stop words used by the default `stopWordFilter`.
    pub static ref ENGLISH_STOP_WORDS: HashSet<String> = {
        vec![
            "a", "able", "about", "across", "after", "all", "almost", "also", "am",
            "among", "an", "and", "any", "are", "as", "at", "be", "because", "been",
            "but", "by", "can", "cannot", "could", "dear", "did", "do", "does",
            "either", "else", "ever", "every", "for", "from", "get", "got", "had",
            "has", "have", "he", "her", "hers", "him", "his", "how", "however", "i",
            "if", "in", "into", "is", "it", "its", "just", "least", "let", "like",
            "likely", "may", "me", "might", "most", "must", "my", "neither", "no",
            "nor", "not", "of", "off", "often", "on", "only", "or", "other", "our",
            "own", "rather", "said", "say", "says", "she", "should", "since", "so",
            "some", "than", "that", "the", "their", "them", "then", "there", "these",
            "they", "this", "tis", "to", "too", "twas", "us", "wants", "was", "we",
            "were", "what", "when", "where", "which", "while", "who", "whom", "why",
            "will", "with", "would", "yet", "you", "your"
        ].into_iter().map(String::from).collect()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stop_words() {
        assert!(ENGLISH_STOP_WORDS.contains("the"));
        assert!(ENGLISH_STOP_WORDS.contains("and"));
        assert!(!ENGLISH_STOP_WORDS.contains("book"));
    }
}
