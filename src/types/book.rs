//! The per-book result of one analysis run.

use std::ops::Range;

use regex::Regex;
use serde::Serialize;

use crate::index::PassageIndex;

use super::RareWordEntry;

/// Everything derived from one book: ranked vocabulary, context passages and
/// the word-to-passage index. Immutable once built; a new run replaces it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAnalysis {
    pub title: String,
    pub ranked_words: Vec<RareWordEntry>,
    /// Passage texts; a passage's index is its position here.
    pub passages: Vec<String>,
    pub index: PassageIndex,
}

impl BookAnalysis {
    /// Text of passage `i`.
    pub fn passage(&self, i: usize) -> Option<&str> {
        self.passages.get(i).map(String::as_str)
    }

    /// The first `limit` passages containing `word`, in reading order.
    pub fn contexts(&self, word: &str, limit: usize) -> Vec<&str> {
        self.index
            .get(&word.to_lowercase())
            .iter()
            .take(limit)
            .filter_map(|&i| self.passage(i))
            .collect()
    }

    /// Total number of passages containing `word`.
    pub fn occurrence_count(&self, word: &str) -> usize {
        self.index.get(&word.to_lowercase()).len()
    }

    /// The ranked entry for `word`, if it made the list.
    pub fn entry(&self, word: &str) -> Option<&RareWordEntry> {
        let word = word.to_lowercase();
        self.ranked_words.iter().find(|e| e.word == word)
    }

    /// Ranked entries whose word contains `query` (case-insensitive),
    /// keeping rank order. An empty query returns the whole list.
    pub fn search(&self, query: &str) -> Vec<&RareWordEntry> {
        let query = query.trim().to_lowercase();
        self.ranked_words
            .iter()
            .filter(|e| e.word.contains(&query))
            .collect()
    }

    /// Serialize to pretty JSON for the presentation layer.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Byte ranges of whole-word, case-insensitive occurrences of `word` in
/// `passage`. Word characters are ASCII letters, digits and `_`.
pub fn highlight_spans(passage: &str, word: &str) -> Vec<Range<usize>> {
    if word.is_empty() {
        return Vec::new();
    }
    match Regex::new(&format!(r"(?i-u)\b{}\b", regex::escape(word))) {
        Ok(pattern) => pattern.find_iter(passage).map(|m| m.range()).collect(),
        Err(e) => {
            log::debug!("No highlight pattern for \"{}\": {}", word, e);
            Vec::new()
        }
    }
}
