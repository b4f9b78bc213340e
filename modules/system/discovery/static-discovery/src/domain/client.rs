//! `DiscoveryClient` implementation for static discovery.

use async_trait::async_trait;
use discovery_sdk::{DiscoveryClient, DiscoveryError};

use super::service::StaticDiscovery;

#[async_trait]
impl DiscoveryClient for StaticDiscovery {
    async fn base_url(&self, service_name: &str) -> Result<String, DiscoveryError> {
        self.resolve(service_name)
    }
}
