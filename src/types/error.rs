//! Error types for the analysis pipeline and its collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by book analysis.
///
/// Only whole-operation failures escape a book call. `Chapter` is produced by
/// chapter sources but is absorbed (logged and skipped) by the book loader.
#[derive(Error, Debug)]
pub enum HoardError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid book source: {0}")]
    InvalidSource(String),

    #[error("Chapter {index} failed to load: {reason}")]
    Chapter { index: usize, reason: String },

    #[error("Markup error: {0}")]
    Markup(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Reference corpus error: {0}")]
    Corpus(String),

    #[error("{0} (try again)")]
    Lookup(#[from] LookupError),
}

impl HoardError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error only affects a single chapter.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Chapter { .. } | Self::Markup(_))
    }
}

pub type HoardResult<T> = Result<T, HoardError>;

/// Errors from the dictionary collaborator. A missing entry is not an error.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Dictionary request failed: {0}")]
    Transport(String),

    #[error("Dictionary response could not be decoded: {0}")]
    Decode(String),
}

pub type LookupResult<T> = Result<T, LookupError>;
