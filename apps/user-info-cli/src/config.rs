//! Application configuration.
//!
//! Layered with figment: built-in defaults, then the optional YAML file,
//! then `APP__`-prefixed environment variables (`__` separates nesting,
//! e.g. `APP__MODULES__DISCOVERY__BASE_URL`).

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use modkit_http::HttpClientConfig;
use serde::Deserialize;
use static_discovery::StaticDiscoveryConfig;
use user_info::UserInfoConfig;

const ENV_PREFIX: &str = "APP__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub modules: ModulesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModulesConfig {
    pub user_info: UserInfoConfig,
    pub discovery: StaticDiscoveryConfig,
    pub http_client: HttpClientConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `path` and the environment.
    ///
    /// # Errors
    ///
    /// Fails if `path` does not exist or any layer does not match the schema.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(
                path.is_file(),
                "config file '{}' does not exist",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Ok(figment.extract()?)
    }
}
