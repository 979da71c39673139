//! Analysis session: holds the current book's artifacts.
//!
//! A new book replaces the previous artifacts wholesale, and only once it
//! has been analyzed successfully. A failed attempt leaves the session as it
//! was.

use std::sync::Arc;

use crate::engine::pipeline::Analyzer;
use crate::source::ChapterSource;
use crate::types::{BookAnalysis, HoardResult};

pub struct AnalysisSession {
    analyzer: Analyzer,
    current: Option<BookAnalysis>,
}

impl AnalysisSession {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            current: None,
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Analyze a book from `source` and make it current.
    pub async fn process<S: ChapterSource>(&mut self, source: Arc<S>) -> HoardResult<&BookAnalysis> {
        let analysis = self.analyzer.analyze_source(source).await.map_err(|e| {
            log::error!("Failed to process book: {}", e);
            e
        })?;
        Ok(self.current.insert(analysis))
    }

    /// Analyze already-extracted text and make it current.
    pub fn process_text(&mut self, title: &str, text: &str) -> &BookAnalysis {
        let analysis = self.analyzer.analyze_text(title, text);
        self.current.insert(analysis)
    }

    /// The current book, if one has been processed.
    pub fn current(&self) -> Option<&BookAnalysis> {
        self.current.as_ref()
    }

    /// Context passages for `word` in the current book, capped at the
    /// configured context limit.
    pub fn contexts(&self, word: &str) -> Vec<&str> {
        let limit = self.analyzer.config().context_limit;
        self.current
            .as_ref()
            .map(|book| book.contexts(word, limit))
            .unwrap_or_default()
    }

    /// Drop the current book.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
