//! Dictionary lookup collaborator: response model, decoding and caching.
//!
//! Lookups distinguish three outcomes: a definition (`Ok(Some(_))`), no
//! entry for the word (`Ok(None)`), and a failed request (`Err(_)`), which
//! the caller may retry.

pub mod cache;
#[cfg(feature = "http")]
pub mod http;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::types::{LookupError, LookupResult};

pub use cache::{DefinitionCache, DefinitionStore, MemoryStore};
#[cfg(feature = "http")]
pub use http::FreeDictionaryClient;

/// One dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

impl Definition {
    /// First non-empty pronunciation audio URL.
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|audio| !audio.is_empty())
    }

    /// Phonetic spelling, falling back to the first phonetic variant.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| self.phonetics.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Sense>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// A single sense of a word within one part of speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Anything that can look up a word's definition.
pub trait DefinitionLookup: Send + Sync {
    /// Look up a lowercase word.
    fn lookup(&self, word: &str) -> impl Future<Output = LookupResult<Option<Definition>>> + Send;
}

/// Decode a dictionary HTTP response.
///
/// 404 means the word has no entry. The body of a successful response is a
/// JSON array of entries, of which the first is used.
pub fn decode_response(status: u16, body: &str) -> LookupResult<Option<Definition>> {
    if status == 404 {
        return Ok(None);
    }
    if !(200..300).contains(&status) {
        return Err(LookupError::Transport(format!(
            "dictionary service returned status {status}"
        )));
    }
    let entries: Vec<Definition> =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;
    Ok(entries.into_iter().next())
}
