//! Configuration for the HTTP client.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// HTTP client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpClientConfig {
    /// Overall per-request deadline (e.g. `"5s"`, `"250ms"`).
    ///
    /// Unset means requests wait until the server answers or the
    /// connection fails.
    #[serde(deserialize_with = "deserialize_opt_duration")]
    pub timeout: Option<Duration>,

    /// `User-Agent` header sent with every request unless the caller sets one.
    pub user_agent: Option<String>,
}

fn deserialize_opt_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| humantime::parse_duration(&s).map_err(serde::de::Error::custom))
        .transpose()
}
