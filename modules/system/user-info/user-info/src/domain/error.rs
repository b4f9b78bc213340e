//! Domain errors for the user info module.

use discovery_sdk::DiscoveryError;
use modkit_http::TransportError;
use modkit_security::PrincipalKind;
use user_info_sdk::{ResponseError, UserInfoError};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("only user credentials are supported, got '{kind}'")]
    UnsupportedPrincipal { kind: PrincipalKind },

    #[error("user credentials are unexpectedly missing a token")]
    MissingToken,

    #[error("malformed token: {reason}")]
    MalformedToken { reason: String },

    #[error("user entity ref must be a string")]
    InvalidSubjectClaim,

    #[error("identity authority rejected the request: {0}")]
    RemoteResolutionFailed(ResponseError),

    #[error("invalid user info response: {0}")]
    InvalidRemoteResponse(#[from] serde_json::Error),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DomainError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedToken {
            reason: reason.into(),
        }
    }
}

impl From<DomainError> for UserInfoError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UnsupportedPrincipal { kind } => Self::UnsupportedPrincipal { kind },
            DomainError::MissingToken => Self::MissingToken,
            DomainError::MalformedToken { reason } => Self::MalformedToken(reason),
            DomainError::InvalidSubjectClaim => Self::InvalidSubjectClaim,
            DomainError::RemoteResolutionFailed(resp) => Self::RemoteResolutionFailed(resp),
            DomainError::InvalidRemoteResponse(e) => Self::InvalidRemoteResponse(e.to_string()),
            DomainError::Discovery(e) => Self::Discovery(e),
            DomainError::Transport(e) => Self::Transport(e),
        }
    }
}
