//! Extraction of the user token from request credentials.

use std::fmt;

use modkit_security::{Credentials, PrincipalKind};
use secrecy::ExposeSecret;

use super::DomainError;

/// Bearer token of a user principal, borrowed from its credentials.
pub struct UserToken<'a> {
    token: &'a str,
    kind: PrincipalKind,
}

impl UserToken<'_> {
    #[must_use]
    pub fn token(&self) -> &str {
        self.token
    }

    #[must_use]
    pub fn principal_kind(&self) -> PrincipalKind {
        self.kind
    }
}

impl fmt::Debug for UserToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserToken")
            .field("token", &"[REDACTED]")
            .field("kind", &self.kind)
            .finish()
    }
}

/// Extract the bearer token from user credentials.
///
/// # Errors
///
/// - `UnsupportedPrincipal` if the credentials are not for a user
/// - `MissingToken` if no non-empty token is attached
pub fn unwrap_user_token(credentials: &Credentials) -> Result<UserToken<'_>, DomainError> {
    let kind = credentials.principal_kind();
    if kind != PrincipalKind::User {
        return Err(DomainError::UnsupportedPrincipal { kind });
    }

    let token = credentials
        .token()
        .map(ExposeSecret::expose_secret)
        .filter(|t| !t.is_empty())
        .ok_or(DomainError::MissingToken)?;

    Ok(UserToken { token, kind })
}
