//! Index structures built per book.

pub mod passage_index;

pub use passage_index::PassageIndex;
