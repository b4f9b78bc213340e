#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Discovery
//!
//! Resolves service base URLs from configuration alone, without a registry.
//!
//! ## Rules
//!
//! - A service listed under an `endpoints` entry resolves to that entry's
//!   `target`, with `{{pluginId}}` replaced by the service name.
//! - Any other service resolves to `{base_url}{base_path}/{service}`.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   discovery:
//!     base_url: "http://localhost:7007"
//!     base_path: "/api"
//!     endpoints:
//!       - target: "http://auth.internal:8080/api/{{pluginId}}"
//!         plugins: ["auth"]
//! ```

pub mod config;
pub mod domain;

pub use config::{EndpointConfig, StaticDiscoveryConfig};
pub use domain::StaticDiscovery;
