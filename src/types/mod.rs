//! Shared data types for the analysis pipeline.

pub mod book;
pub mod error;

use serde::{Deserialize, Serialize};

pub use book::{highlight_spans, BookAnalysis};
pub use error::{HoardError, HoardResult, LookupError, LookupResult};

/// Position of a word in the reference corpus.
///
/// `Ranked(1)` is the most frequent word. Words absent from the corpus are
/// `Unranked`, which behaves like an infinite rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalRank {
    Ranked(u32),
    Unranked,
}

impl GlobalRank {
    pub fn is_unranked(self) -> bool {
        matches!(self, Self::Unranked)
    }

    /// The numeric rank, if the word is in the corpus.
    pub fn value(self) -> Option<u32> {
        match self {
            Self::Ranked(rank) => Some(rank),
            Self::Unranked => None,
        }
    }
}

impl From<Option<u32>> for GlobalRank {
    fn from(rank: Option<u32>) -> Self {
        rank.map_or(Self::Unranked, Self::Ranked)
    }
}

/// One scored candidate in the ranked vocabulary list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RareWordEntry {
    pub word: String,
    /// Occurrences across the whole book.
    pub book_frequency: u32,
    /// Corpus rank; always known for listed words.
    pub global_rank: u32,
    pub rarity_score: f64,
}
