use std::time::Duration;

use wordbox_types::{LookupEntry, NotFound};

const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the remote dictionary service. One GET per lookup, no
/// retries. Every failure mode collapses into [`NotFound`]; callers never
/// distinguish "no such word" from "network down" from "bad payload".
#[derive(Clone)]
pub struct DictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Look up a word. Callers guarantee `word` is non-empty; it is
    /// percent-encoded before transmission.
    pub async fn lookup(&self, word: &str) -> Result<LookupEntry, NotFound> {
        let url = format!("{}/{}", self.base_url, urlencoding::encode(word));

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("lookup transport error: {e}");
                NotFound
            })?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), word, "lookup rejected");
            return Err(NotFound);
        }

        let entries: Vec<LookupEntry> = response.json().await.map_err(|e| {
            tracing::debug!("lookup payload malformed: {e}");
            NotFound
        })?;

        first_entry(entries)
    }
}

impl Default for DictionaryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// The service responds with an array of entries; only the first is
/// rendered. An empty array is a malformed payload and fails explicitly.
fn first_entry(entries: Vec<LookupEntry>) -> Result<LookupEntry, NotFound> {
    entries.into_iter().next().ok_or_else(|| {
        tracing::debug!("lookup returned an empty entry list");
        NotFound
    })
}
