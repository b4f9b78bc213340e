use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Classification of the subject behind a set of [`Credentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    User,
    Service,
    None,
}

impl PrincipalKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Service => "service",
            Self::None => "none",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subject a set of credentials was issued for.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Principal {
    /// An end user, identified by their catalog entity reference.
    User { user_entity_ref: String },
    /// Another backend service.
    Service { subject: String },
    /// Unauthenticated caller.
    None,
}

impl Principal {
    #[must_use]
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::User { .. } => PrincipalKind::User,
            Self::Service { .. } => PrincipalKind::Service,
            Self::None => PrincipalKind::None,
        }
    }
}

/// `Credentials` describe the caller of a request.
///
/// Built by the authentication layer after the caller's token has been
/// verified, and handed read-only to anything that needs to know who is
/// calling. For user principals the original bearer token travels along so
/// that downstream services can forward it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Credentials {
    principal: Principal,
    /// Original bearer token. Never serialized/persisted.
    /// Wrapped in `SecretString` so `Debug` redacts the value automatically.
    #[serde(skip)]
    token: Option<SecretString>,
}

impl Credentials {
    /// Create a new `Credentials` builder
    #[must_use]
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::default()
    }

    /// Credentials of a user, carrying the token that authenticated them.
    #[must_use]
    pub fn user(user_entity_ref: impl Into<String>, token: impl Into<SecretString>) -> Self {
        Self::builder()
            .principal(Principal::User {
                user_entity_ref: user_entity_ref.into(),
            })
            .token(token)
            .build()
    }

    /// Credentials of a backend service.
    #[must_use]
    pub fn service(subject: impl Into<String>) -> Self {
        Self::builder()
            .principal(Principal::Service {
                subject: subject.into(),
            })
            .build()
    }

    /// Credentials of an unauthenticated caller.
    #[must_use]
    pub fn none() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    #[must_use]
    pub fn principal_kind(&self) -> PrincipalKind {
        self.principal.kind()
    }

    /// Get the original bearer token, if one is attached.
    #[must_use]
    pub fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }

    /// Whether a non-empty token is attached.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }
}

pub struct CredentialsBuilder {
    principal: Principal,
    token: Option<SecretString>,
}

impl Default for CredentialsBuilder {
    fn default() -> Self {
        Self {
            principal: Principal::None,
            token: None,
        }
    }
}

impl CredentialsBuilder {
    #[must_use]
    pub fn principal(mut self, principal: Principal) -> Self {
        self.principal = principal;
        self
    }

    #[must_use]
    pub fn token(mut self, token: impl Into<SecretString>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Credentials {
        Credentials {
            principal: self.principal,
            token: self.token,
        }
    }
}
