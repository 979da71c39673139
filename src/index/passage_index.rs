//! Inverted index mapping words to the passages they occur in.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Serialize, Serializer};

use crate::engine::tokenizer::Tokenizer;

/// An inverted index mapping tokenized words to posting lists of passage
/// indices. Each list is ascending and holds a passage at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassageIndex {
    /// word → ascending passage indices
    postings: HashMap<String, Vec<usize>>,
    passage_count: usize,
}

impl PassageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from passages in index order, using the same tokenizer
    /// as whole-book counting.
    pub fn build<S: AsRef<str>>(passages: &[S], tokenizer: &Tokenizer) -> Self {
        let mut index = Self::new();
        for passage in passages {
            index.add_passage(passage.as_ref(), tokenizer);
        }
        index
    }

    /// Append the next passage. Its index is the number of passages added so
    /// far, so postings stay sorted without searching.
    pub fn add_passage(&mut self, text: &str, tokenizer: &Tokenizer) {
        let passage = self.passage_count;
        let mut seen = HashSet::new();

        for word in tokenizer.tokenize(text) {
            if seen.contains(&word) {
                continue;
            }
            self.postings.entry(word.clone()).or_default().push(passage);
            seen.insert(word);
        }

        self.passage_count += 1;
    }

    /// Passage indices containing `word`, ascending; empty if never seen.
    pub fn get(&self, word: &str) -> &[usize] {
        self.postings.get(word).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Whether `word` occurs in passage `passage`.
    pub fn contains(&self, word: &str, passage: usize) -> bool {
        self.get(word).binary_search(&passage).is_ok()
    }

    /// Number of indexed passages.
    pub fn passage_count(&self) -> usize {
        self.passage_count
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }

    /// Postings ordered by word, for deterministic output.
    pub fn sorted(&self) -> BTreeMap<&str, &[usize]> {
        self.postings
            .iter()
            .map(|(word, list)| (word.as_str(), list.as_slice()))
            .collect()
    }
}

impl Serialize for PassageIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sorted().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_word_indexed_once_per_passage() {
        let passages = ["Thunder, thunder and more thunder.", "Quiet evening.", "Thunder again."];
        let index = PassageIndex::build(&passages, &Tokenizer::new());
        assert_eq!(index.get("thunder"), &[0, 2]);
        assert_eq!(index.get("evening"), &[1]);
        assert!(index.get("lightning").is_empty());
        assert!(index.contains("thunder", 2));
        assert!(!index.contains("thunder", 1));
        assert_eq!(index.passage_count(), 3);
    }

    #[test]
    fn test_stop_words_not_indexed() {
        let index = PassageIndex::build(&["the cat and the hat"], &Tokenizer::new());
        assert!(index.get("the").is_empty());
        assert!(index.get("and").is_empty());
        assert_eq!(index.word_count(), 2);
    }

    #[test]
    fn test_serializes_with_sorted_keys() {
        let index = PassageIndex::build(&["zebra apple", "apple"], &Tokenizer::new());
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"apple":[0,1],"zebra":[0]}"#);
    }
}
