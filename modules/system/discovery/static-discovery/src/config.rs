//! Configuration for static discovery.

use serde::Deserialize;

/// Static discovery configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticDiscoveryConfig {
    /// Base URL every service is reachable under by default.
    pub base_url: String,

    /// Path prefix placed between `base_url` and the service name.
    pub base_path: String,

    /// Per-service overrides, checked in order.
    pub endpoints: Vec<EndpointConfig>,
}

impl Default for StaticDiscoveryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:7007".to_owned(),
            base_path: "/api".to_owned(),
            endpoints: Vec::new(),
        }
    }
}

/// Routes a set of services to an explicit target URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Target base URL. May contain the `{{pluginId}}` placeholder.
    pub target: String,

    /// Services served by this target.
    pub plugins: Vec<String>,
}
