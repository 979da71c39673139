//! In-book word frequency counting.

use std::collections::HashMap;

/// Word → occurrence count over one book's token stream.
///
/// Iteration follows first-seen order so ranking ties stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    /// word → position in `entries`
    slots: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a stream.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut freqs = Self::new();
        for token in tokens {
            freqs.record(token.as_ref());
        }
        freqs
    }

    /// Add one occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        match self.slots.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Occurrences of `word`, 0 if never seen.
    pub fn get(&self, word: &str) -> u32 {
        self.slots
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// `(word, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| *count as u64).sum()
    }
}
