//! HTTP client for the Free Dictionary API.

use crate::types::{LookupError, LookupResult};

use super::{decode_response, Definition, DefinitionLookup};

pub const FREE_DICTIONARY_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Looks words up on the Free Dictionary API. No key required.
#[derive(Debug, Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl FreeDictionaryClient {
    pub fn new() -> Self {
        Self::with_base_url(FREE_DICTIONARY_BASE)
    }

    /// Point the client at another deployment of the same API.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn entry_url(&self, word: &str) -> LookupResult<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| LookupError::Transport(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Transport("base URL cannot take a path".into()))?
            .push(word);
        Ok(url)
    }
}

impl Default for FreeDictionaryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionLookup for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> LookupResult<Option<Definition>> {
        let url = self.entry_url(&word.to_lowercase())?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        decode_response(status, &body)
    }
}
