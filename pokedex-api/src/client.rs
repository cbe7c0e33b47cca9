use serde::de::DeserializeOwned;

use pokedex_core::{CatalogPage, ItemDetail};

use crate::config::ClientConfig;
use crate::error::CatalogError;
use crate::source::CatalogSource;
use crate::types::PokemonResponse;

/// HTTP client for the PokeAPI catalog.
///
/// Every failure is reported as [`CatalogError::RequestFailed`]; the cause
/// is only visible in the debug log.
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client. Uses the HTTP library's default timeouts.
    pub fn new(config: &ClientConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            log::debug!("Failed to build HTTP client: {e}");
            CatalogError::RequestFailed
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of the listing: `GET {base}/pokemon?limit=&offset=`.
    pub async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CatalogPage, CatalogError> {
        let url = format!("{}/pokemon", self.base_url);
        log::debug!("GET {url} limit={limit} offset={offset}");

        let request = self
            .http
            .get(&url)
            .query(&[("limit", limit), ("offset", offset)]);
        self.get_json(request, &url).await
    }

    /// Fetch one item by name or id: `GET {base}/pokemon/{name}`.
    pub async fn fetch_detail(&self, name: &str) -> Result<ItemDetail, CatalogError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        log::debug!("GET {url}");

        let resp: PokemonResponse = self.get_json(self.http.get(&url), &url).await?;
        Ok(resp.into())
    }

    /// Send a request and parse its JSON body, collapsing every failure
    /// into the opaque request error.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, CatalogError> {
        let resp = request.send().await.map_err(|e| {
            log::debug!("Request to {url} failed: {e}");
            CatalogError::RequestFailed
        })?;

        let status = resp.status();
        if !status.is_success() {
            log::debug!("Request to {url} returned HTTP {status}");
            return Err(CatalogError::RequestFailed);
        }

        let text = resp.text().await.map_err(|e| {
            log::debug!("Failed to read response from {url}: {e}");
            CatalogError::RequestFailed
        })?;

        serde_json::from_str(&text).map_err(|e| {
            log::debug!(
                "Failed to parse response from {url}: {e}. Response: {}",
                truncate(&text, 200)
            );
            CatalogError::RequestFailed
        })
    }
}

impl CatalogSource for PokeApiClient {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CatalogPage, CatalogError> {
        PokeApiClient::fetch_page(self, limit, offset).await
    }

    async fn fetch_detail(&self, name: &str) -> Result<ItemDetail, CatalogError> {
        PokeApiClient::fetch_detail(self, name).await
    }
}

/// Cut `s` to at most `max` bytes without splitting a character.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
