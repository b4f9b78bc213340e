//! Public API trait for service discovery.

use async_trait::async_trait;

use crate::error::DiscoveryError;

/// Resolves logical service names to base URLs.
///
/// Implementations are shared between concurrent callers.
#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// Base URL of the service registered as `service_name`.
    ///
    /// The returned URL never ends with a trailing slash, so callers append
    /// paths starting with `/`.
    ///
    /// # Errors
    ///
    /// - `UnknownService` if no address is known for the name
    /// - `Unavailable` if the registry cannot be reached
    async fn base_url(&self, service_name: &str) -> Result<String, DiscoveryError>;
}
