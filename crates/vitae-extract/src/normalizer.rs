use std::collections::HashSet;

/// English stop words (standard list; contraction fragments survive word
/// splitting, so "don't" arrives as "don" + "t" and both are filtered).
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
    "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Text normalizer: lowercases, splits into alphanumeric word runs, and
/// filters stop words. The resulting token set feeds skill membership tests.
pub struct Normalizer {
    stop_words: HashSet<String>,
}

impl Normalizer {
    /// Normalizer with the built-in English stop word list.
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Normalizer with a caller-supplied stop word set (already lowercased).
    pub fn with_stop_words(stop_words: impl IntoIterator<Item = String>) -> Self {
        Self {
            stop_words: stop_words.into_iter().collect(),
        }
    }

    /// Tokenize `text` into the set of lowercase alphanumeric tokens with
    /// stop words removed. Deterministic, no side effects.
    pub fn token_set(&self, text: &str) -> HashSet<String> {
        let lower = text.to_lowercase();
        lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|tok| !tok.is_empty() && !self.stop_words.contains(*tok))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
