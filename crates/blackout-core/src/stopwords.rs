//! Function words that are never redacted.

use std::collections::HashSet;

/// Articles, pronouns, auxiliaries, conjunctions, prepositions and quantifiers.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "down", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "it", "its", "he", "him", "his", "she", "her", "they", "them", "their", "we", "us",
    "our", "you", "your", "this", "that", "these", "those", "who", "which", "what", "where",
    "when", "why", "how", "much", "many", "few", "little", "all", "some", "any", "no", "not",
    "only", "own", "same", "so", "than", "too", "very", "as", "into", "just", "over", "out",
    "while", "about",
];

/// Closed stopword vocabulary. Lookups expect an already cleaned, lower-cased term.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<&'static str>,
}

impl Stopwords {
    pub fn new() -> Self {
        Self {
            words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}
