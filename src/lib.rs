//! # wordhoard
//!
//! Mines a book for rare vocabulary. Chapter documents are flattened to text,
//! split into context passages and tokenized; in-book word counts are scored
//! against a reference corpus of global word ranks, and an inverted index
//! maps every word to the passages it appears in.
//!
//! ```no_run
//! use std::sync::Arc;
//! use wordhoard::{AnalysisConfig, Analyzer, ReferenceCorpus};
//!
//! let corpus = Arc::new(ReferenceCorpus::parse("the\nof\nand\n"));
//! let analyzer = Analyzer::new(corpus, AnalysisConfig::default()).unwrap();
//! let book = analyzer.analyze_text("Notes", "A lugubrious evening.");
//! for entry in &book.ranked_words {
//!     println!("{} {:.1}", entry.word, entry.rarity_score);
//! }
//! ```

pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod engine;
pub mod index;
pub mod session;
pub mod source;
pub mod types;

pub use config::AnalysisConfig;
pub use corpus::ReferenceCorpus;
pub use dictionary::{
    decode_response, Definition, DefinitionCache, DefinitionLookup, DefinitionStore, Meaning,
    MemoryStore, Phonetic, Sense,
};
#[cfg(feature = "http")]
pub use dictionary::FreeDictionaryClient;
pub use engine::{
    effective_rank, rarity_score, Analyzer, Chunker, DocumentNode, RarityParams, RarityRanker,
    TextExtractor, Tokenizer, WordFrequencies,
};
pub use index::PassageIndex;
pub use session::AnalysisSession;
pub use source::{load_book_text, BookText, ChapterSource, DirectorySource};
pub use types::{
    highlight_spans, BookAnalysis, GlobalRank, HoardError, HoardResult, LookupError, LookupResult,
    RareWordEntry,
};
