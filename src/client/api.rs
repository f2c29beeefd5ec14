//! PokeAPI Client
//!
//! Every lookup goes through the cache: hit returns the stored bytes, miss
//! performs the GET and stores the exact, undecoded payload under the full
//! request URL before decoding. Cached and fresh paths therefore decode
//! identical bytes, and a page revisited within the TTL costs no network
//! round trip.

use std::time::Duration;

use tracing::debug;

use crate::cache::Cache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Request timeout for PokeAPI calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// == API Client ==
/// HTTP client for the PokeAPI with an injected response cache.
///
/// The cache is supplied at construction rather than shared globally, so
/// tests get isolated instances with deterministic TTLs. The client never
/// holds the cache lock across network I/O: lookups release before the
/// fetch, stores acquire after the body has been read.
#[derive(Debug)]
pub struct ApiClient {
    /// Underlying HTTP client
    http: reqwest::Client,
    /// Response cache, keyed by fully-resolved request URL
    cache: Cache,
    /// API base URL, no trailing slash
    base_url: String,
}

impl ApiClient {
    // == Constructor ==
    /// Creates a client for `base_url` using `cache` for responses.
    pub fn new(base_url: impl Into<String>, cache: Cache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: base_url.into(),
        })
    }

    // == Fetch Bytes ==
    /// Returns the payload for `url`, from cache when possible.
    ///
    /// The URL is the cache key, byte-for-byte; no normalization happens
    /// here, so callers must build URLs consistently. On a miss the raw
    /// response bytes are cached before any decoding.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(bytes) = self.cache.get(url).await {
            return Ok(bytes);
        }

        debug!(url, "fetching from network");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?.to_vec();
        self.cache.add(url, bytes.clone()).await;

        Ok(bytes)
    }

    // == List Location Areas ==
    /// Fetches a page of location areas.
    ///
    /// With no `page_url` this fetches the first page; pagination follows
    /// the `next`/`previous` URLs returned in the page itself.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}/location-area", self.base_url),
        };

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Location Area Detail ==
    /// Fetches the encounter list for a named location area.
    pub async fn location_area_detail(&self, name: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, name);

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Pokemon ==
    /// Fetches a pokemon record by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Cache Access ==
    /// The client's response cache.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }
}
