// MediaWiki Action API client — unauthenticated JSON over HTTPS.
//
// A thin reqwest wrapper with a generic GET helper. Every request goes to
// the same api.php endpoint; only the query parameters vary.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::article::FetchError;

/// Default Action API endpoint (English Wikipedia).
pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Unauthenticated HTTP client for the MediaWiki Action API.
///
/// Defaults to English Wikipedia — pass a different URL for testing or
/// for other MediaWiki installations.
pub struct WikiClient {
    client: reqwest::Client,
    api_url: String,
}

impl WikiClient {
    /// Create a new client pointing at the given api.php endpoint.
    pub fn new(api_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("wordmill/0.1 (word-frequency analysis)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make an `action=query` GET request and deserialize the response.
    ///
    /// `params` are appended to the standard `action=query&format=json`
    /// pair. Transport errors, non-2xx statuses, and undeserializable
    /// bodies all collapse into `FetchError::Request` — the caller maps
    /// them to a single upstream-failure response.
    pub async fn query<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!(params = ?params, "Wikipedia API query");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json")])
            .query(params)
            .send()
            .await?;

        let response = response.error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}
