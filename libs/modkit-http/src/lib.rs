//! ModKit HTTP
//!
//! Minimal HTTP client capability used by modules that call other services:
//!
//! - [`HttpTransport`] - the capability trait, injected wherever a module
//!   needs to issue requests (and substituted in tests)
//! - [`HyperTransport`] - the default implementation on a pooled
//!   `hyper-util` client with rustls
//! - [`HttpResponse`] - a fully buffered response
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod error;
pub mod hyper_transport;
pub mod response;
pub mod transport;

pub use config::HttpClientConfig;
pub use error::TransportError;
pub use hyper_transport::HyperTransport;
pub use response::HttpResponse;
pub use transport::HttpTransport;
