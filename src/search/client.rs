//! HTTP client for the Google Programmable Search JSON API.

use super::models::{CseResponse, SearchHit};
use crate::config::Config;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use wreq::Client;

const CSE_BASE: &str = "https://www.googleapis.com";

/// Ways a live search can fail.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search adapter is not configured")]
    Unavailable,

    #[error("search timed out after {0:?}")]
    Timeout(Duration),

    #[error("search returned status: {0}")]
    Status(u16),

    #[error("search request failed: {0}")]
    Transport(String),

    #[error("malformed search response: {0}")]
    Decode(String),
}

/// Trait for live web search - enables mocking for tests.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Returns up to `max_results` hits for `query`.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError>;
}

/// Programmable Search client.
pub struct CseClient {
    client: Client,
    api_key: String,
    engine_id: String,
    base_url: String,
}

impl CseClient {
    /// Creates a client against the public endpoint.
    pub fn new(
        api_key: impl Into<String>,
        engine_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, engine_id, timeout, CSE_BASE.to_string())
    }

    /// Creates a client with a custom base URL (for testing).
    pub fn with_base_url(
        api_key: impl Into<String>,
        engine_id: impl Into<String>,
        timeout: Duration,
        base_url: String,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(Self { client, api_key: api_key.into(), engine_id: engine_id.into(), base_url })
    }

    /// Builds a client from configuration, or `None` when credentials are missing.
    pub fn from_config(config: &Config) -> Option<Self> {
        let Some((key, cx)) = config.search_credentials() else {
            debug!("Search credentials not set, live lookup unavailable");
            return None;
        };

        let timeout = Duration::from_secs(config.search_timeout_secs.max(1));
        match Self::new(key, cx, timeout) {
            Ok(client) => Some(client),
            Err(e) => {
                debug!("Could not build search client: {}", e);
                None
            }
        }
    }

    fn url(&self, query: &str, num: usize) -> String {
        format!(
            "{}/customsearch/v1?key={}&cx={}&q={}&num={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.engine_id),
            urlencoding::encode(query),
            num
        )
    }
}

#[async_trait]
impl WebSearch for CseClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        let num = max_results.clamp(1, 10);
        info!("Searching comps: {} (num {})", query, num);

        let url = self.url(query, num);
        let response = self
            .client
            .get(url.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| SearchError::Transport(e.to_string()))?;
        let parsed: CseResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(parsed.into_hits())
    }
}
