//! Local (in-process) client for the user info module.

use std::sync::Arc;

use async_trait::async_trait;
use modkit_security::Credentials;
use user_info_sdk::{UserInfo, UserInfoClient, UserInfoError};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed out by the module during `init()`.
pub struct UserInfoLocalClient {
    svc: Arc<Service>,
}

impl UserInfoLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> UserInfoError {
    tracing::error!(operation = op, error = %e, "user_info call failed");
    e.into()
}

#[async_trait]
impl UserInfoClient for UserInfoLocalClient {
    async fn get_user_info(&self, credentials: &Credentials) -> Result<UserInfo, UserInfoError> {
        self.svc
            .get_user_info(credentials)
            .await
            .map_err(|e| log_and_convert("get_user_info", e))
    }
}
