//! Analysis configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::chunker::{DEFAULT_MAX_PASSAGE_LEN, DEFAULT_MIN_PASSAGE_LEN};
use crate::engine::rarity::{
    RarityParams, DEFAULT_LIMIT, DEFAULT_MAX_BOOK_FREQUENCY, DEFAULT_MIN_GLOBAL_RANK,
};
use crate::types::{HoardError, HoardResult};

pub const DEFAULT_CONTEXT_LIMIT: usize = 5;
pub const DEFAULT_CHAPTER_CONCURRENCY: usize = 4;

/// Tunables for one analysis run. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Corpus ranks below this are too common to list.
    pub min_global_rank: u32,
    /// Words seen more often than this in the book are dropped.
    pub max_book_frequency: u32,
    /// Length cap of the ranked list.
    pub limit: usize,
    pub min_passage_len: usize,
    pub max_passage_len: usize,
    /// Passages shown per selected word.
    pub context_limit: usize,
    /// Chapter loads in flight at once.
    pub chapter_concurrency: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_global_rank: DEFAULT_MIN_GLOBAL_RANK,
            max_book_frequency: DEFAULT_MAX_BOOK_FREQUENCY,
            limit: DEFAULT_LIMIT,
            min_passage_len: DEFAULT_MIN_PASSAGE_LEN,
            max_passage_len: DEFAULT_MAX_PASSAGE_LEN,
            context_limit: DEFAULT_CONTEXT_LIMIT,
            chapter_concurrency: DEFAULT_CHAPTER_CONCURRENCY,
        }
    }
}

impl AnalysisConfig {
    /// Parse from TOML text and validate.
    pub fn from_toml_str(source: &str) -> HoardResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| HoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file and validate.
    pub fn load(path: &Path) -> HoardResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| HoardError::io(path, e))?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> HoardResult<()> {
        if self.limit == 0 {
            return Err(HoardError::Config("limit must be at least 1".into()));
        }
        if self.chapter_concurrency == 0 {
            return Err(HoardError::Config(
                "chapter_concurrency must be at least 1".into(),
            ));
        }
        if self.min_passage_len > self.max_passage_len {
            return Err(HoardError::Config(format!(
                "min_passage_len ({}) exceeds max_passage_len ({})",
                self.min_passage_len, self.max_passage_len
            )));
        }
        Ok(())
    }

    /// The ranking subset of the configuration.
    pub fn rarity_params(&self) -> RarityParams {
        RarityParams {
            min_global_rank: self.min_global_rank,
            max_book_frequency: self.max_book_frequency,
            limit: self.limit,
        }
    }
}
