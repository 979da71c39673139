//! Pipeline stages: extraction, chunking, tokenizing, counting and ranking.

pub mod chunker;
pub mod extractor;
pub mod frequency;
pub mod pipeline;
pub mod rarity;
pub mod tokenizer;

pub use chunker::Chunker;
pub use extractor::{DocumentNode, TextExtractor};
pub use frequency::WordFrequencies;
pub use pipeline::Analyzer;
pub use rarity::{effective_rank, rarity_score, RarityParams, RarityRanker};
pub use tokenizer::Tokenizer;
