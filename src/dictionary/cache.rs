//! Definition caching with an injectable store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::LookupResult;

use super::{Definition, DefinitionLookup};

/// Key-value store for looked-up definitions. `None` records a confirmed
/// "no entry".
pub trait DefinitionStore: Send + Sync {
    fn get(&self, word: &str) -> Option<Option<Definition>>;
    fn insert(&self, word: &str, definition: Option<Definition>);
}

/// Unbounded in-memory store. Entries live as long as the store; nothing is
/// evicted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Option<Definition>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DefinitionStore for MemoryStore {
    fn get(&self, word: &str) -> Option<Option<Definition>> {
        self.entries.lock().ok()?.get(word).cloned()
    }

    fn insert(&self, word: &str, definition: Option<Definition>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(word.to_string(), definition);
        }
    }
}

/// Wraps a lookup with a store. Definitions and "no entry" answers are
/// cached; failed requests are not, so they can be retried.
pub struct DefinitionCache<L, S = MemoryStore> {
    inner: L,
    store: S,
}

impl<L: DefinitionLookup> DefinitionCache<L, MemoryStore> {
    pub fn new(inner: L) -> Self {
        Self::with_store(inner, MemoryStore::new())
    }
}

impl<L: DefinitionLookup, S: DefinitionStore> DefinitionCache<L, S> {
    pub fn with_store(inner: L, store: S) -> Self {
        Self { inner, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up `word` (case-insensitive), consulting the store first.
    pub async fn get(&self, word: &str) -> LookupResult<Option<Definition>> {
        let word = word.trim().to_lowercase();
        if let Some(hit) = self.store.get(&word) {
            log::debug!("Definition cache hit for \"{}\"", word);
            return Ok(hit);
        }

        let result = self.inner.lookup(&word).await?;
        self.store.insert(&word, result.clone());
        Ok(result)
    }
}

impl<L: DefinitionLookup, S: DefinitionStore> DefinitionLookup for DefinitionCache<L, S> {
    async fn lookup(&self, word: &str) -> LookupResult<Option<Definition>> {
        self.get(word).await
    }
}
