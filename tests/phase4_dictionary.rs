//! Phase 4 tests: dictionary decoding and cached lookups.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use wordhoard::{
    decode_response, Definition, DefinitionCache, DefinitionLookup, DefinitionStore, LookupError,
    LookupResult,
};

const SONOROUS: &str = r#"[{
    "word": "sonorous",
    "phonetics": [{"text": "/ˈsɒn.əɹ.əs/"}, {"text": "/səˈnɔːɹ.əs/", "audio": "https://example.org/sonorous.mp3"}],
    "meanings": [
        {"partOfSpeech": "adjective",
         "definitions": [
            {"definition": "Producing a deep or ringing sound.", "example": "a sonorous bell"},
            {"definition": "Imposing in style.", "synonyms": ["grandiloquent"]}
         ]}
    ]
}]"#;

/// Replays canned HTTP responses through `decode_response`.
struct CannedService {
    responses: HashMap<&'static str, (u16, &'static str)>,
    requests: AtomicUsize,
}

impl CannedService {
    fn new() -> Self {
        let mut responses = HashMap::new();
        responses.insert("sonorous", (200, SONOROUS));
        responses.insert("garbled", (200, "<html>gateway</html>"));
        responses.insert("busy", (429, "slow down"));
        Self {
            responses,
            requests: AtomicUsize::new(0),
        }
    }
}

impl DefinitionLookup for CannedService {
    async fn lookup(&self, word: &str) -> LookupResult<Option<Definition>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let (status, body) = self
            .responses
            .get(word)
            .copied()
            .unwrap_or((404, r#"{"title":"No Definitions Found"}"#));
        decode_response(status, body)
    }
}

/// A store that records how it is used.
#[derive(Default)]
struct RecordingStore {
    entries: Mutex<HashMap<String, Option<Definition>>>,
    writes: AtomicUsize,
}

impl DefinitionStore for RecordingStore {
    fn get(&self, word: &str) -> Option<Option<Definition>> {
        self.entries.lock().unwrap().get(word).cloned()
    }

    fn insert(&self, word: &str, definition: Option<Definition>) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(word.to_string(), definition);
    }
}

async fn define<L: DefinitionLookup>(lookup: &L, word: &str) -> LookupResult<Option<Definition>> {
    lookup.lookup(word).await
}

#[tokio::test]
async fn test_definition_fields_decode() {
    let def = define(&CannedService::new(), "sonorous").await.unwrap().unwrap();
    assert_eq!(def.phonetic_text(), Some("/ˈsɒn.əɹ.əs/"));
    assert_eq!(def.audio_url(), Some("https://example.org/sonorous.mp3"));
    let senses = &def.meanings[0].definitions;
    assert_eq!(senses.len(), 2);
    assert_eq!(senses[0].example.as_deref(), Some("a sonorous bell"));
    assert_eq!(senses[1].synonyms, vec!["grandiloquent"]);
}

#[tokio::test]
async fn test_three_outcomes_are_distinct() {
    let service = CannedService::new();
    assert!(define(&service, "sonorous").await.unwrap().is_some());
    assert!(define(&service, "zyzzyva").await.unwrap().is_none());
    assert!(matches!(
        define(&service, "busy").await,
        Err(LookupError::Transport(_))
    ));
    assert!(matches!(
        define(&service, "garbled").await,
        Err(LookupError::Decode(_))
    ));
}

#[tokio::test]
async fn test_cache_with_injected_store() {
    let cache = DefinitionCache::with_store(CannedService::new(), RecordingStore::default());

    for word in ["Sonorous", "sonorous", "zyzzyva", "zyzzyva", "busy", "busy"] {
        let _ = define(&cache, word).await;
    }

    // One write per distinct answer; the failed lookup is never stored.
    assert_eq!(cache.store().writes.load(Ordering::SeqCst), 2);
    assert!(cache.store().get("sonorous").unwrap().is_some());
    assert!(cache.store().get("zyzzyva").unwrap().is_none());
    assert!(cache.store().get("busy").is_none());
}

#[tokio::test]
async fn test_preloaded_store_skips_the_service() {
    let store = RecordingStore::default();
    store.insert("lugubrious", None);
    let cache = DefinitionCache::with_store(CannedService::new(), store);

    assert!(cache.get("lugubrious").await.unwrap().is_none());
    assert!(cache.get("sonorous").await.unwrap().is_some());
}
