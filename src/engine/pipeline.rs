//! The text-to-vocabulary pipeline.
//!
//! Extracted text feeds two branches: chunking into passages (then the
//! passage index), and tokenizing into a frequency map (then ranking).

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::corpus::ReferenceCorpus;
use crate::index::PassageIndex;
use crate::source::{load_book_text, ChapterSource};
use crate::types::{BookAnalysis, HoardResult};

use super::chunker::Chunker;
use super::extractor::{DocumentNode, TextExtractor};
use super::frequency::WordFrequencies;
use super::rarity::RarityRanker;
use super::tokenizer::Tokenizer;

/// Runs the analysis pipeline against a shared reference corpus.
///
/// Holds no per-book state; every call returns a fresh [`BookAnalysis`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    corpus: Arc<ReferenceCorpus>,
    config: AnalysisConfig,
    tokenizer: Tokenizer,
    chunker: Chunker,
    extractor: TextExtractor,
}

impl Analyzer {
    pub fn new(corpus: Arc<ReferenceCorpus>, config: AnalysisConfig) -> HoardResult<Self> {
        config.validate()?;
        Ok(Self {
            chunker: Chunker::new(config.min_passage_len, config.max_passage_len),
            corpus,
            config,
            tokenizer: Tokenizer::new(),
            extractor: TextExtractor::new(),
        })
    }

    /// Replace the default extractor (for custom block/skip tag sets).
    pub fn with_extractor(mut self, extractor: TextExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Analyze a whole book's extracted text.
    pub fn analyze_text(&self, title: &str, text: &str) -> BookAnalysis {
        let passages = self.chunker.split(text);
        let index = PassageIndex::build(&passages, &self.tokenizer);

        let frequencies = WordFrequencies::from_tokens(self.tokenizer.tokenize(text));
        let ranked_words =
            RarityRanker::new(&self.corpus, self.config.rarity_params()).rank(&frequencies);

        log::info!(
            "Analyzed \"{}\": {} passages, {} tokens, {} distinct words, {} ranked",
            title,
            passages.len(),
            frequencies.total(),
            frequencies.len(),
            ranked_words.len()
        );

        BookAnalysis {
            title: title.to_string(),
            ranked_words,
            passages,
            index,
        }
    }

    /// Analyze already-loaded chapter trees, in order.
    pub fn analyze_documents(&self, title: &str, chapters: &[DocumentNode]) -> BookAnalysis {
        let text = chapters
            .iter()
            .map(|root| self.extractor.extract(root))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");
        self.analyze_text(title, &text)
    }

    /// Load every chapter of `source` and analyze the book.
    ///
    /// Chapter failures are skipped; only an unusable source is an error.
    pub async fn analyze_source<S: ChapterSource>(
        &self,
        source: Arc<S>,
    ) -> HoardResult<BookAnalysis> {
        let book = load_book_text(source, &self.extractor, self.config.chapter_concurrency).await?;
        if book.chapters_skipped > 0 {
            log::warn!(
                "\"{}\": {} chapter(s) skipped",
                book.title,
                book.chapters_skipped
            );
        }
        Ok(self.analyze_text(&book.title, &book.text))
    }
}
