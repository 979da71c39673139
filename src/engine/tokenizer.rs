//! Shared tokenizer for whole-book frequency counting and passage indexing.

use std::collections::HashSet;

/// English stop words excluded from candidacy.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "either", "else", "ever", "every", "few", "for", "from", "further", "get", "got", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "however", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "let", "like", "may",
    "me", "might", "more", "most", "much", "must", "my", "myself", "neither", "no", "nor", "not",
    "now", "of", "off", "often", "on", "once", "one", "only", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "said", "same", "say", "says", "shall", "she",
    "should", "since", "so", "some", "still", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "therefore", "these", "they", "this", "those",
    "though", "through", "thus", "to", "too", "under", "until", "up", "upon", "us", "very", "was",
    "we", "were", "what", "whatever", "when", "whenever", "where", "whereas", "whether", "which",
    "while", "who", "whoever", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Contraction expansions, applied in order after lowercasing.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("n't", " not"),
    ("'s", ""),
    ("'re", " are"),
    ("'ve", " have"),
    ("'ll", " will"),
    ("'d", " would"),
    ("'m", " am"),
];

const MIN_TOKEN_LEN: usize = 3;

/// Deterministic tokenizer producing normalized candidate words.
///
/// The same instance rules apply to full-book counting and to per-passage
/// indexing, so index membership always agrees with the frequency map.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a new tokenizer with the default stop word list.
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Tokenize text into lowercase candidate words, in reading order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        Self::normalize(text)
            .split_whitespace()
            .filter(|token| self.is_candidate(token))
            .map(str::to_string)
            .collect()
    }

    /// Whether a normalized token survives filtering: at least three
    /// lowercase ASCII letters, one vowel, and not a stop word.
    pub fn is_candidate(&self, token: &str) -> bool {
        token.len() >= MIN_TOKEN_LEN
            && token.bytes().all(|b| b.is_ascii_lowercase())
            && token.bytes().any(|b| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u'))
            && !self.stop_words.contains(token)
    }

    /// Whether `word` is in the stop word list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Lowercase, expand contractions and blank out everything that is not
    /// `[a-z]` or whitespace.
    fn normalize(text: &str) -> String {
        // Typographic apostrophes are common in book text.
        let mut text = text.to_lowercase().replace('\u{2019}', "'");
        for (from, to) in CONTRACTIONS {
            text = text.replace(from, to);
        }
        text.chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
