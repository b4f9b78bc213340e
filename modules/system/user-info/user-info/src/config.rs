//! Configuration for the user info module.

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserInfoConfig {
    /// Logical name of the identity authority, resolved through discovery.
    pub auth_service: String,

    /// Path of the user info endpoint, relative to the authority's base URL.
    pub userinfo_path: String,
}

impl Default for UserInfoConfig {
    fn default() -> Self {
        Self {
            auth_service: "auth".to_owned(),
            userinfo_path: "/v1/userinfo".to_owned(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: UserInfoConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(cfg.auth_service, "auth");
        assert_eq!(cfg.userinfo_path, "/v1/userinfo");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<UserInfoConfig, _> =
            serde_json::from_value(serde_json::json!({ "cache_ttl": "5m" }));
        assert!(res.is_err());
    }
}
