//! User info resolution service.

use std::sync::Arc;

use discovery_sdk::DiscoveryClient;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};
use modkit_http::HttpTransport;
use modkit_security::Credentials;
use serde::Deserialize;
use tracing::{debug, warn};
use user_info_sdk::{ResponseError, UserInfo};

use super::DomainError;
use super::claims::decode_claims;
use super::credentials::unwrap_user_token;
use crate::config::UserInfoConfig;

/// Body of a successful user info response from the identity authority.
#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    sub: String,
    ent: Vec<String>,
}

/// Resolves user info from credentials.
///
/// Stateless between calls: nothing is cached, and the only shared state
/// is the injected discovery and transport, both safe for concurrent use.
pub struct Service {
    discovery: Arc<dyn DiscoveryClient>,
    transport: Arc<dyn HttpTransport>,
    auth_service: String,
    userinfo_path: String,
}

impl Service {
    #[must_use]
    pub fn new(
        discovery: Arc<dyn DiscoveryClient>,
        transport: Arc<dyn HttpTransport>,
        cfg: &UserInfoConfig,
    ) -> Self {
        let path = cfg.userinfo_path.trim_start_matches('/');
        Self {
            discovery,
            transport,
            auth_service: cfg.auth_service.clone(),
            userinfo_path: format!("/{path}"),
        }
    }

    /// Resolve the user info for `credentials`.
    ///
    /// The token carried by `credentials` must already have been verified
    /// (signature and expiry) by the authentication layer. It is decoded
    /// here, never verified again.
    ///
    /// # Errors
    ///
    /// See [`DomainError`]; every failure ends the call, nothing is retried.
    #[tracing::instrument(skip_all, fields(principal = %credentials.principal_kind()))]
    pub async fn get_user_info(&self, credentials: &Credentials) -> Result<UserInfo, DomainError> {
        let user_token = unwrap_user_token(credentials)?;
        self.resolve_token(user_token.token()).await
    }

    /// Resolve the user info for an already verified user token.
    ///
    /// # Errors
    ///
    /// See [`DomainError`].
    pub async fn resolve_token(&self, token: &str) -> Result<UserInfo, DomainError> {
        let claims = decode_claims(token)?;

        if let Some(ownership_entity_refs) = claims.ownership_entity_refs {
            debug!(
                user_entity_ref = %claims.user_entity_ref,
                ownership_count = ownership_entity_refs.len(),
                "User info resolved from token claims"
            );
            return Ok(UserInfo {
                user_entity_ref: claims.user_entity_ref,
                ownership_entity_refs,
            });
        }

        debug!(
            user_entity_ref = %claims.user_entity_ref,
            "Token has no complete ownership claim, querying identity authority"
        );
        self.fetch_user_info(token).await
    }

    async fn fetch_user_info(&self, token: &str) -> Result<UserInfo, DomainError> {
        let base_url = self.discovery.base_url(&self.auth_service).await?;
        let url = format!("{base_url}{}", self.userinfo_path);

        let mut authorization = HeaderValue::try_from(format!("Bearer {token}"))
            .map_err(|_| DomainError::malformed("token is not a valid header value"))?;
        authorization.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        debug!(url = %url, "Requesting user info");
        let response = self.transport.get(&url, headers).await?;

        if !response.status().is_success() {
            let err = ResponseError::from_response(&response);
            warn!(url = %url, status = err.status(), "User info request failed");
            return Err(DomainError::RemoteResolutionFailed(err));
        }

        let UserInfoResponse { sub, ent } = response.json::<UserInfoResponse>()?;
        Ok(UserInfo {
            user_entity_ref: sub,
            ownership_entity_refs: ent,
        })
    }
}
