use thiserror::Error;

use crate::telemetry::MalformedPayload;

/// Errors raised while talking to the telemetry service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL could not be turned into an endpoint URL
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure (unreachable, timeout, reset)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-success status
    #[error("Service returned status {status} for '{url}'")]
    UpstreamStatus { url: String, status: u16 },

    /// Response body did not have the expected shape
    #[error("Malformed response from '{url}': {source}")]
    MalformedPayload {
        url: String,
        #[source]
        source: MalformedPayload,
    },

    /// Response body was not JSON
    #[error("Undecodable response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// True when the service was never reached.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Request { .. })
    }
}
