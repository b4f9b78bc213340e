//! HTTP transport capability.

use async_trait::async_trait;
use http::HeaderMap;

use crate::error::TransportError;
use crate::response::HttpResponse;

/// Capability to issue HTTP requests and receive buffered responses.
///
/// Implementations must be safe to share between concurrent callers.
/// A non-2xx status is not an error at this layer: the caller decides
/// what a status means.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a `GET` request to `url` with the given headers.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` if `url` cannot be parsed
    /// - `Request` if the connection or body read fails
    /// - `Timeout` if a configured timeout elapses first
    async fn get(&self, url: &str, headers: HeaderMap) -> Result<HttpResponse, TransportError>;
}
