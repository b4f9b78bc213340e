//! Public API trait for user info resolution.

use async_trait::async_trait;
use modkit_security::Credentials;

use crate::error::UserInfoError;
use crate::models::UserInfo;

/// Public API trait for user info resolution.
///
/// ```ignore
/// let info = user_info.get_user_info(&credentials).await?;
/// println!("{} owns {:?}", info.user_entity_ref, info.ownership_entity_refs);
/// ```
///
/// # Preconditions
///
/// `credentials` must come from the authentication layer, which has already
/// verified the token's signature and expiry. Implementations only decode
/// the token and never check it again.
#[async_trait]
pub trait UserInfoClient: Send + Sync {
    /// Resolve the identity of the user behind `credentials`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedPrincipal` if the credentials are not for a user
    /// - `MissingToken` if user credentials carry no token
    /// - `MalformedToken` / `InvalidSubjectClaim` if the token claims cannot be used
    /// - `RemoteResolutionFailed` if the identity authority answers with a non-2xx status
    /// - `InvalidRemoteResponse`, `Discovery`, `Transport` for failures reaching it
    async fn get_user_info(&self, credentials: &Credentials) -> Result<UserInfo, UserInfoError>;
}
