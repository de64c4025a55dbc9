//! MBTA client error types.

/// Errors from a transit data provider call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The API rejected the request itself (400, 403, 404)
    #[error("request rejected with {status}: {message}")]
    BadRequest { status: u16, message: String },

    /// Throttled by the API (429), still throttled after all retries
    #[error("rate limited by MBTA API")]
    RateLimited,

    /// Any other non-success status
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// Response body could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Fixture data for the mock client is missing or unreadable
    #[error("mock data error: {0}")]
    MockData(String),
}

impl ProviderError {
    /// Whether repeating the same request later might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProviderError::RateLimited | ProviderError::Timeout)
    }

    /// Classify a non-success HTTP status.
    pub(crate) fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            429 => ProviderError::RateLimited,
            400 | 403 | 404 => ProviderError::BadRequest {
                status: status.as_u16(),
                message,
            },
            other => ProviderError::UnexpectedStatus {
                status: other,
                message,
            },
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(err)
        }
    }
}
