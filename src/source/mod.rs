//! Chapter sources and ordered, bounded chapter loading.

pub mod directory;
pub mod markup;

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::engine::extractor::{DocumentNode, TextExtractor};
use crate::types::{HoardError, HoardResult};

pub use directory::DirectorySource;

/// A book as a title plus chapters that load asynchronously.
///
/// A failed chapter load returns `Err` for that index only; it never affects
/// other chapters.
pub trait ChapterSource: Send + Sync + 'static {
    /// Book title.
    fn title(&self) -> String;

    /// Number of chapters, in reading order.
    fn chapter_count(&self) -> usize;

    /// Load chapter `index` as a document tree.
    fn load_chapter(&self, index: usize) -> impl Future<Output = HoardResult<DocumentNode>> + Send;
}

/// The joined plain text of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookText {
    pub title: String,
    /// Chapter texts in source order, separated by a blank line.
    pub text: String,
    pub chapters_loaded: usize,
    pub chapters_skipped: usize,
}

/// Load every chapter of `source` with at most `concurrency` loads in
/// flight and join their texts in source order.
///
/// Failed chapters are logged and left out; empty chapters are left out
/// too. Only a source without chapters is an error.
pub async fn load_book_text<S: ChapterSource>(
    source: Arc<S>,
    extractor: &TextExtractor,
    concurrency: usize,
) -> HoardResult<BookText> {
    let count = source.chapter_count();
    if count == 0 {
        return Err(HoardError::InvalidSource(format!(
            "\"{}\" has no chapters",
            source.title()
        )));
    }

    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let extractor = Arc::new(extractor.clone());
    let mut tasks = JoinSet::new();

    for index in 0..count {
        let source = Arc::clone(&source);
        let permits = Arc::clone(&permits);
        let extractor = Arc::clone(&extractor);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await.ok();
            let text = source.load_chapter(index).await.map(|root| {
                log::debug!("Chapter {} parsed: {} nodes", index, root.node_count());
                extractor.extract(&root)
            });
            (index, text)
        });
    }

    let mut slots: Vec<Option<String>> = vec![None; count];
    let mut chapters_skipped = 0;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, Ok(text))) => slots[index] = Some(text),
            Ok((index, Err(e))) => {
                if e.is_recoverable() {
                    log::warn!("Skipping chapter {}: {}", index, e);
                } else {
                    log::error!("Skipping chapter {}: {}", index, e);
                }
                chapters_skipped += 1;
            }
            Err(e) => {
                log::warn!("Skipping chapter after task failure: {}", e);
                chapters_skipped += 1;
            }
        }
    }

    let chapters_loaded = slots.iter().filter(|slot| slot.is_some()).count();
    let text = slots
        .into_iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    log::debug!(
        "Loaded {} of {} chapters ({} characters)",
        chapters_loaded,
        count,
        text.len()
    );

    Ok(BookText {
        title: source.title(),
        text,
        chapters_loaded,
        chapters_skipped,
    })
}
