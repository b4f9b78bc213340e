//! Discovery SDK
//!
//! Public API for locating other services by their logical name:
//!
//! - [`DiscoveryClient`] - API trait for consumers
//! - [`DiscoveryError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use discovery_sdk::DiscoveryClient;
//!
//! let base_url = discovery.base_url("auth").await?;
//! let userinfo_url = format!("{base_url}/v1/userinfo");
//! ```

pub mod api;
pub mod error;

pub use api::DiscoveryClient;
pub use error::DiscoveryError;
