//! Rarity scoring and ranking of in-book vocabulary.

use crate::corpus::ReferenceCorpus;
use crate::types::{GlobalRank, RareWordEntry};

use super::frequency::WordFrequencies;

pub const DEFAULT_MIN_GLOBAL_RANK: u32 = 3000;
pub const DEFAULT_MAX_BOOK_FREQUENCY: u32 = 50;
pub const DEFAULT_LIMIT: usize = 500;

/// Multiplier applied to the corpus size to get the penalty rank of words
/// the corpus does not know.
const UNRANKED_PENALTY_FACTOR: f64 = 10.0;
/// Books mentioning a word fewer times than this earn a boost.
const BOOK_BOOST_CEILING: u32 = 10;
const BOOK_BOOST_PER_STEP: f64 = 5.0;
const LANGUAGE_RARITY_SCALE: f64 = 100.0;

/// Rank fed into the score. Unranked words score at a penalty rank of ten
/// times the corpus size.
pub fn effective_rank(rank: GlobalRank, corpus_size: usize) -> f64 {
    match rank {
        GlobalRank::Ranked(rank) => rank as f64,
        GlobalRank::Unranked => corpus_size as f64 * UNRANKED_PENALTY_FACTOR,
    }
}

/// Combined rarity score; higher is rarer.
pub fn rarity_score(book_frequency: u32, rank: GlobalRank, corpus_size: usize) -> f64 {
    let language_rarity = (effective_rank(rank, corpus_size) + 1.0).log10() * LANGUAGE_RARITY_SCALE;
    let book_boost = BOOK_BOOST_CEILING.saturating_sub(book_frequency) as f64 * BOOK_BOOST_PER_STEP;
    language_rarity + book_boost
}

/// Parameters for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityParams {
    /// Words ranked below this in the corpus are too common to list.
    pub min_global_rank: u32,
    /// Words seen more often than this in the book are dropped.
    pub max_book_frequency: u32,
    /// Maximum number of entries returned.
    pub limit: usize,
}

impl Default for RarityParams {
    fn default() -> Self {
        Self {
            min_global_rank: DEFAULT_MIN_GLOBAL_RANK,
            max_book_frequency: DEFAULT_MAX_BOOK_FREQUENCY,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Filters, scores and sorts a book's frequency map against the corpus.
pub struct RarityRanker<'a> {
    corpus: &'a ReferenceCorpus,
    params: RarityParams,
}

impl<'a> RarityRanker<'a> {
    pub fn new(corpus: &'a ReferenceCorpus, params: RarityParams) -> Self {
        Self { corpus, params }
    }

    /// Whether the corpus knows the word at all. Unknown words are typos,
    /// OCR noise or foreign words and never become candidates.
    pub fn is_known_word(&self, word: &str) -> bool {
        self.corpus.contains(word)
    }

    /// Whether a known word is too common in the language to be listed.
    fn is_too_common(&self, rank: u32) -> bool {
        rank < self.params.min_global_rank
    }

    /// Ranked entries, highest score first, ties in first-seen order.
    pub fn rank(&self, frequencies: &WordFrequencies) -> Vec<RareWordEntry> {
        let corpus_size = self.corpus.len();
        let mut entries: Vec<RareWordEntry> = Vec::new();

        for (word, book_frequency) in frequencies.iter() {
            if book_frequency > self.params.max_book_frequency {
                continue;
            }
            if !self.is_known_word(word) {
                continue;
            }
            let rank = self.corpus.rank(word);
            let Some(global_rank) = rank.value() else {
                continue;
            };
            if self.is_too_common(global_rank) {
                continue;
            }

            entries.push(RareWordEntry {
                word: word.to_string(),
                book_frequency,
                global_rank,
                rarity_score: rarity_score(book_frequency, rank, corpus_size),
            });
        }

        // Stable: equal scores keep first-seen order.
        entries.sort_by(|a, b| {
            b.rarity_score
                .partial_cmp(&a.rarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries.truncate(self.params.limit);

        log::debug!(
            "Ranked {} of {} distinct words",
            entries.len(),
            frequencies.len()
        );
        entries
    }
}
