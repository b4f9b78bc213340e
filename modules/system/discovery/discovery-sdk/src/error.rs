//! Error types for service discovery.

use thiserror::Error;

/// Errors that can occur when resolving a service address.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// No address is known for the requested service.
    #[error("no address known for service '{0}'")]
    UnknownService(String),

    /// The discovery configuration is invalid.
    #[error("invalid discovery configuration: {0}")]
    InvalidConfig(String),

    /// The underlying registry is not reachable.
    #[error("discovery unavailable: {0}")]
    Unavailable(String),
}
