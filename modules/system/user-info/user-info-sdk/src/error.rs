//! Error types for the `user_info` module.

use std::fmt;

use discovery_sdk::DiscoveryError;
use http::StatusCode;
use modkit_http::{HttpResponse, TransportError};
use modkit_security::PrincipalKind;
use thiserror::Error;

/// Errors that can occur when resolving user info.
#[derive(Debug, Error)]
pub enum UserInfoError {
    /// The credentials belong to something other than a user.
    #[error("only user credentials are supported, got '{kind}'")]
    UnsupportedPrincipal { kind: PrincipalKind },

    /// User credentials without a token. The authentication layer never
    /// produces these, so this indicates a bug upstream.
    #[error("user credentials are unexpectedly missing a token")]
    MissingToken,

    /// The token is not a decodable JWT.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// The token's `sub` claim is absent or not a string.
    #[error("user entity ref must be a string")]
    InvalidSubjectClaim,

    /// The identity authority answered with a non-2xx status.
    #[error("user info request failed: {0}")]
    RemoteResolutionFailed(ResponseError),

    /// The identity authority answered 2xx with an unexpected body.
    #[error("invalid user info response: {0}")]
    InvalidRemoteResponse(String),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A non-2xx response from a remote service.
///
/// Keeps the status and the raw body so callers can see what the remote
/// side reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    status: u16,
    status_text: String,
    body: String,
}

impl ResponseError {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_owned();
        Self {
            status,
            status_text,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        Self::new(response.status().as_u16(), response.text())
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Error message reported by the remote side, if the body carries one.
    ///
    /// Understands `{"error": "..."}` and `{"error": {"message": "..."}}`.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        match value.get("error")? {
            serde_json::Value::String(msg) => Some(msg.clone()),
            serde_json::Value::Object(obj) => obj
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request failed with {}", self.status)?;
        if !self.status_text.is_empty() {
            write!(f, " {}", self.status_text)?;
        }
        if let Some(msg) = self.message() {
            write!(f, ", {msg}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResponseError {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn string_error_body_is_reported() {
        let err = ResponseError::new(401, r#"{"error":"invalid token"}"#);

        assert_eq!(err.status(), 401);
        assert_eq!(err.status_text(), "Unauthorized");
        assert_eq!(err.body(), r#"{"error":"invalid token"}"#);
        assert_eq!(err.message().as_deref(), Some("invalid token"));
        assert_eq!(
            err.to_string(),
            "request failed with 401 Unauthorized, invalid token"
        );
    }

    #[test]
    fn structured_error_body_is_reported() {
        let err = ResponseError::new(
            403,
            r#"{"error":{"name":"NotAllowedError","message":"nope"},"response":{"statusCode":403}}"#,
        );

        assert_eq!(err.message().as_deref(), Some("nope"));
    }

    #[test]
    fn non_json_body_falls_back_to_status_line() {
        let err = ResponseError::new(502, "<html>Bad Gateway</html>");

        assert!(err.message().is_none());
        assert_eq!(err.to_string(), "request failed with 502 Bad Gateway");
        assert_eq!(err.body(), "<html>Bad Gateway</html>");
    }

    #[test]
    fn unknown_status_has_no_text() {
        let err = ResponseError::new(599, "");

        assert_eq!(err.status_text(), "");
        assert_eq!(err.to_string(), "request failed with 599");
    }

    #[test]
    fn unsupported_principal_names_the_kind() {
        let err = UserInfoError::UnsupportedPrincipal {
            kind: PrincipalKind::Service,
        };

        assert_eq!(
            err.to_string(),
            "only user credentials are supported, got 'service'"
        );
    }
}
