//! Upstream error types.

use thiserror::Error;

use crate::records::MalformedResponse;

/// Errors from a single upstream call. None of them are retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout.
    #[error("failed to make request to {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with anything other than 200 OK.
    #[error("API returned status code: {status} for URL: {url}, response: {body}")]
    Status { status: u16, url: String, body: String },

    /// A 200 response whose body could not be read.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponse),

    #[error("invalid upstream URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport { .. } => "transport",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Body { .. } => "body",
            UpstreamError::MalformedResponse(_) => "malformed",
            UpstreamError::InvalidUrl { .. } => "invalid_url",
            UpstreamError::Client(_) => "client",
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
