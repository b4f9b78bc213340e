//! Error types for the HTTP transport.

use std::time::Duration;

use thiserror::Error;

/// Errors raised before a response could be obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid HTTP client configuration: {0}")]
    InvalidConfig(String),

    #[error("request to '{url}' failed: {reason}")]
    Request { url: String, reason: String },

    #[error("request to '{url}' timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
}
