//! Reference corpus: global word frequency ranks.
//!
//! Built once from a ranked word list (one word per line, optionally followed
//! by tab-separated columns) and shared read-only afterwards.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::types::{GlobalRank, HoardError, HoardResult};

/// Process-wide corpus slot, filled at most once.
static GLOBAL_CORPUS: OnceLock<Arc<ReferenceCorpus>> = OnceLock::new();

/// Immutable mapping from lowercase word to rank (1 = most frequent).
#[derive(Debug, Clone, Default)]
pub struct ReferenceCorpus {
    ranks: HashMap<String, u32>,
}

impl ReferenceCorpus {
    /// Parse a ranked word list. A word's rank is its 1-based line number;
    /// blank lines are skipped but still occupy their position. When a word
    /// repeats, its first (most frequent) position wins.
    pub fn parse(source: &str) -> Self {
        let mut ranks = HashMap::new();

        for (line_no, line) in source.trim().lines().enumerate() {
            let word = line.split('\t').next().unwrap_or("").trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            ranks.entry(word).or_insert(line_no as u32 + 1);
        }

        Self { ranks }
    }

    /// Build from words already in rank order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranks = HashMap::new();
        for (i, word) in words.into_iter().enumerate() {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                ranks.entry(word).or_insert(i as u32 + 1);
            }
        }
        Self { ranks }
    }

    /// Build from explicit `(word, rank)` pairs.
    pub fn from_ranks<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        Self {
            ranks: pairs
                .into_iter()
                .map(|(word, rank)| (word.as_ref().trim().to_lowercase(), rank))
                .collect(),
        }
    }

    /// Read and parse a word list file.
    pub fn load(path: &Path) -> HoardResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| HoardError::io(path, e))?;
        let corpus = Self::parse(&source);
        if corpus.is_empty() {
            return Err(HoardError::Corpus(format!(
                "{} contains no words",
                path.display()
            )));
        }
        log::info!(
            "Loaded reference corpus from {}: {} words",
            path.display(),
            corpus.len()
        );
        Ok(corpus)
    }

    /// Rank used for scoring; absent words are `Unranked`.
    pub fn rank(&self, word: &str) -> GlobalRank {
        self.ranks.get(word).copied().into()
    }

    /// Corpus membership, used as the known-English-word filter.
    pub fn contains(&self, word: &str) -> bool {
        self.ranks.contains_key(word)
    }

    /// Number of ranked words.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Install the process-wide corpus. The first installed corpus stays; later
/// calls get the existing one back.
pub fn install(corpus: ReferenceCorpus) -> Arc<ReferenceCorpus> {
    let mut fresh = Some(corpus);
    let installed = GLOBAL_CORPUS.get_or_init(|| Arc::new(fresh.take().unwrap_or_default()));
    if fresh.is_some() {
        log::warn!("Reference corpus already installed; keeping the existing one");
    }
    Arc::clone(installed)
}

/// Load a word list into the process-wide slot, or return the corpus that
/// is already there.
pub fn load_global(path: &Path) -> HoardResult<Arc<ReferenceCorpus>> {
    if let Some(corpus) = GLOBAL_CORPUS.get() {
        return Ok(Arc::clone(corpus));
    }
    Ok(install(ReferenceCorpus::load(path)?))
}

/// The process-wide corpus, if installed.
pub fn global() -> Option<Arc<ReferenceCorpus>> {
    GLOBAL_CORPUS.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_is_line_position() {
        let corpus = ReferenceCorpus::parse("the\nOf\n\n  And  \n");
        assert_eq!(corpus.rank("the"), GlobalRank::Ranked(1));
        assert_eq!(corpus.rank("of"), GlobalRank::Ranked(2));
        assert_eq!(corpus.rank("and"), GlobalRank::Ranked(4));
        assert_eq!(corpus.rank("missing"), GlobalRank::Unranked);
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_tab_delimited_columns() {
        let corpus = ReferenceCorpus::parse("the\t23135851162\nof\t13151942776\n");
        assert_eq!(corpus.rank("of"), GlobalRank::Ranked(2));
        assert!(!corpus.contains("13151942776"));
    }

    #[test]
    fn test_duplicate_keeps_first_rank() {
        let corpus = ReferenceCorpus::parse("cat\ndog\nCat\n");
        assert_eq!(corpus.rank("cat"), GlobalRank::Ranked(1));
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_load_crlf_file_with_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "the\r\nCat\t99\r\n\r\nlugubrious\r\n").unwrap();

        let corpus = ReferenceCorpus::load(&path).unwrap();
        assert_eq!(corpus.rank("the"), GlobalRank::Ranked(1));
        assert_eq!(corpus.rank("cat"), GlobalRank::Ranked(2));
        assert_eq!(corpus.rank("lugubrious"), GlobalRank::Ranked(4));
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceCorpus::load(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, HoardError::Io { .. }));
    }

    #[test]
    fn test_load_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, "\n   \n\r\n").unwrap();
        let err = ReferenceCorpus::load(&path).unwrap_err();
        assert!(matches!(err, HoardError::Corpus(_)));
    }

    #[test]
    fn test_membership_and_rank_are_separate_checks() {
        let corpus = ReferenceCorpus::from_ranks([("lugubrious", 9000)]);
        assert!(corpus.contains("lugubrious"));
        assert!(!corpus.contains("zzxq"));
        assert!(corpus.rank("zzxq").is_unranked());
        assert_eq!(corpus.rank("lugubrious").value(), Some(9000));
    }
}
