//! Endpoint error types.

use thiserror::Error;

/// Result type for endpoint operations.
pub type EndpointResult<T> = Result<T, EndpointError>;

/// Errors produced while composing request URLs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EndpointError {
    #[error("Invalid URL: {url} ({reason})")]
    InvalidUrl { url: String, reason: String },
}

impl EndpointError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
