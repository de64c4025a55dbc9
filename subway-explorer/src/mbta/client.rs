//! MBTA v3 HTTP client.
//!
//! Provides async methods for the two read operations the explorer needs:
//! listing subway routes and listing the stops of one route. Handles
//! timeouts, status classification and backoff on throttling.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{Route, Stop};
use crate::network::TransitProvider;

use super::error::ProviderError;
use super::types::{RoutesDocument, StopsDocument};

/// Default base URL for the MBTA v3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Default number of retries after a throttled or timed-out request.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry, doubled on each attempt.
const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;

/// Route types requested from the API: light rail and heavy rail.
const SUBWAY_ROUTE_TYPES: &str = "0,1";

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// Base URL for the API (defaults to production MBTA)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries after a retryable failure
    pub max_retries: u32,
    /// Initial backoff between retries in milliseconds
    pub retry_backoff_ms: u64,
}

impl MbtaConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the number of retries after a throttled or timed-out request.
    pub fn with_max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Set the initial retry backoff.
    pub fn with_retry_backoff(mut self, millis: u64) -> Self {
        self.retry_backoff_ms = millis;
        self
    }

    /// Backoff before retry number `attempt` (zero-based).
    fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        Duration::from_millis(self.retry_backoff_ms.saturating_mul(factor))
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// MBTA v3 API client.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    config: MbtaConfig,
}

impl MbtaClient {
    /// Create a new MBTA client with the given configuration.
    pub fn new(config: MbtaConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.api+json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .gzip(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch all light and heavy rail routes, in API order.
    pub async fn get_routes(&self) -> Result<Vec<Route>, ProviderError> {
        let doc: RoutesDocument = self
            .get_document(
                "routes",
                &[
                    ("fields[route]", "long_name,type"),
                    ("filter[type]", SUBWAY_ROUTE_TYPES),
                ],
            )
            .await?;

        Ok(doc.into_routes())
    }

    /// Fetch the stops served by a route, in API order.
    pub async fn get_stops(&self, route_id: &str) -> Result<Vec<Stop>, ProviderError> {
        let doc: StopsDocument = self
            .get_document(
                "stops",
                &[("fields[stop]", "name"), ("filter[route]", route_id)],
            )
            .await?;

        Ok(doc.into_stops())
    }

    /// GET a document, retrying retryable failures with exponential backoff.
    async fn get_document<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);

        let mut attempt = 0;
        loop {
            match self.get_once(&url, query).await {
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = self.config.backoff(attempt);
                    warn!(%url, error = %e, ?delay, attempt, "retrying request");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn get_once<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        debug!(%url, ?query, "GET");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status, body));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ProviderError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TransitProvider for MbtaClient {
    async fn fetch_routes(&self) -> Result<Vec<Route>, ProviderError> {
        self.get_routes().await
    }

    async fn fetch_stops(&self, route: &Route) -> Result<Vec<Stop>, ProviderError> {
        self.get_stops(route.id()).await
    }
}
