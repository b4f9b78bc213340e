//! User info module.

use std::sync::{Arc, OnceLock};

use discovery_sdk::DiscoveryClient;
use modkit_http::HttpTransport;
use tracing::info;
use user_info_sdk::UserInfoClient;

use crate::config::UserInfoConfig;
use crate::domain::{Service, UserInfoLocalClient};

/// Collaborators the module is built from.
#[derive(Clone)]
pub struct UserInfoDeps {
    /// Locates the identity authority.
    pub discovery: Arc<dyn DiscoveryClient>,
    /// Carries the user info request.
    pub transport: Arc<dyn HttpTransport>,
}

/// User info module.
///
/// Builds the resolution service once from its configuration and injected
/// dependencies, and hands out the [`UserInfoClient`] consumers use.
#[derive(Default)]
pub struct UserInfoModule {
    service: OnceLock<Arc<Service>>,
}

impl UserInfoModule {
    /// Initialize the module.
    ///
    /// # Errors
    ///
    /// Fails if the module has already been initialized.
    #[tracing::instrument(skip_all, fields(auth_service = %cfg.auth_service))]
    pub fn init(
        &self,
        cfg: &UserInfoConfig,
        deps: UserInfoDeps,
    ) -> anyhow::Result<Arc<dyn UserInfoClient>> {
        info!(
            auth_service = %cfg.auth_service,
            userinfo_path = %cfg.userinfo_path,
            "Initializing user_info"
        );

        let svc = Arc::new(Service::new(deps.discovery, deps.transport, cfg));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(Arc::new(UserInfoLocalClient::new(svc)))
    }

    /// Client for an initialized module.
    #[must_use]
    pub fn client(&self) -> Option<Arc<dyn UserInfoClient>> {
        self.service
            .get()
            .map(|svc| Arc::new(UserInfoLocalClient::new(svc.clone())) as Arc<dyn UserInfoClient>)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use modkit_security::Credentials;
    use serde_json::json;

    use super::*;
    use crate::test_support::{AUTH_BASE_URL, FixedDiscovery, ScriptedTransport, jwt};

    fn deps() -> UserInfoDeps {
        UserInfoDeps {
            discovery: Arc::new(FixedDiscovery::new(AUTH_BASE_URL)),
            transport: Arc::new(ScriptedTransport::new()),
        }
    }

    #[tokio::test]
    async fn init_returns_working_client() {
        let module = UserInfoModule::default();
        assert!(module.client().is_none());

        let client = module.init(&UserInfoConfig::default(), deps()).unwrap();
        let token = jwt(&json!({ "sub": "user:default/alice", "ent": [] }));
        let info = client
            .get_user_info(&Credentials::user("user:default/alice", token))
            .await
            .unwrap();

        assert_eq!(info.user_entity_ref, "user:default/alice");
        assert!(module.client().is_some());
    }

    #[test]
    fn double_init_is_rejected() {
        let module = UserInfoModule::default();
        module.init(&UserInfoConfig::default(), deps()).unwrap();

        assert!(module.init(&UserInfoConfig::default(), deps()).is_err());
    }
}
