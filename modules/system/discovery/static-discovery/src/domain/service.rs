//! Service implementation for static discovery.

use discovery_sdk::DiscoveryError;
use url::Url;

use crate::config::StaticDiscoveryConfig;

const PLUGIN_ID_PLACEHOLDERS: [&str; 2] = ["{{pluginId}}", "{{ pluginId }}"];

/// Static discovery service.
///
/// Validated once at construction; lookups are pure string work.
#[derive(Debug, Clone)]
pub struct StaticDiscovery {
    default_prefix: String,
    endpoints: Vec<Endpoint>,
}

#[derive(Debug, Clone)]
struct Endpoint {
    target: String,
    plugins: Vec<String>,
}

impl StaticDiscovery {
    /// Create a discovery service from configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `base_url` or an endpoint `target` is not
    /// an absolute `http`/`https` URL.
    pub fn from_config(cfg: &StaticDiscoveryConfig) -> Result<Self, DiscoveryError> {
        let base_url = cfg.base_url.trim_end_matches('/');
        validate_url("base_url", base_url)?;

        let base_path = cfg.base_path.trim_matches('/');
        let default_prefix = if base_path.is_empty() {
            base_url.to_owned()
        } else {
            format!("{base_url}/{base_path}")
        };

        let endpoints = cfg
            .endpoints
            .iter()
            .map(|e| {
                validate_url("endpoints.target", &substitute(&e.target, "plugin"))?;
                Ok(Endpoint {
                    target: e.target.clone(),
                    plugins: e.plugins.clone(),
                })
            })
            .collect::<Result<Vec<_>, DiscoveryError>>()?;

        tracing::debug!(
            default_prefix = %default_prefix,
            endpoint_count = endpoints.len(),
            "Static discovery configured"
        );

        Ok(Self {
            default_prefix,
            endpoints,
        })
    }

    /// Resolve the base URL for `service_name`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownService` if the name is empty or contains `/`.
    pub fn resolve(&self, service_name: &str) -> Result<String, DiscoveryError> {
        if service_name.is_empty() || service_name.contains('/') {
            return Err(DiscoveryError::UnknownService(service_name.to_owned()));
        }

        let target = self
            .endpoints
            .iter()
            .find(|e| e.plugins.iter().any(|p| p == service_name));

        let url = match target {
            Some(endpoint) => substitute(&endpoint.target, service_name)
                .trim_end_matches('/')
                .to_owned(),
            None => format!("{}/{service_name}", self.default_prefix),
        };

        Ok(url)
    }
}

fn substitute(target: &str, service_name: &str) -> String {
    PLUGIN_ID_PLACEHOLDERS
        .iter()
        .fold(target.to_owned(), |acc, p| acc.replace(p, service_name))
}

fn validate_url(field: &str, raw: &str) -> Result<(), DiscoveryError> {
    let url = Url::parse(raw)
        .map_err(|e| DiscoveryError::InvalidConfig(format!("{field} '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(DiscoveryError::InvalidConfig(format!(
            "{field} '{raw}': unsupported scheme '{other}'"
        ))),
    }
}
