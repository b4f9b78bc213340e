//! Decoding of user token claims.
//!
//! Tokens reaching this module have already been verified by the
//! authentication layer. Only the payload is decoded here: the header and
//! signature segments are not inspected, and `exp`/`nbf` are ignored.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;
use serde_json::{Map, Value};

use super::DomainError;

/// base64url, accepting payloads with or without padding.
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const SUBJECT_CLAIM: &str = "sub";
const OWNERSHIP_CLAIM: &str = "ent";

/// The identity-related claims of a user token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Entity reference of the user (`sub`).
    pub user_entity_ref: String,

    /// Ownership entity references (`ent`).
    ///
    /// `None` unless the claim is an array of strings. A partially valid
    /// claim is treated exactly like an absent one.
    pub ownership_entity_refs: Option<Vec<String>>,
}

impl TokenClaims {
    /// Extract the identity claims from a decoded payload.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSubjectClaim` if `sub` is missing or not a string.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, DomainError> {
        let Some(Value::String(user_entity_ref)) = payload.get(SUBJECT_CLAIM) else {
            return Err(DomainError::InvalidSubjectClaim);
        };

        Ok(Self {
            user_entity_ref: user_entity_ref.clone(),
            ownership_entity_refs: payload.get(OWNERSHIP_CLAIM).and_then(string_array),
        })
    }

    /// Whether the token alone is enough to answer a user info request.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ownership_entity_refs.is_some()
    }
}

/// Decode the identity claims of a compact JWT without verifying it.
///
/// # Errors
///
/// - `MalformedToken` if the token is not a compact JWS with a JSON object payload
/// - `InvalidSubjectClaim` if `sub` is missing or not a string
pub fn decode_claims(token: &str) -> Result<TokenClaims, DomainError> {
    let payload = decode_payload(token)?;
    TokenClaims::from_payload(&payload)
}

/// Decode the payload segment of a compact JWT into a JSON object.
///
/// # Errors
///
/// Returns `MalformedToken` describing the first problem found.
pub fn decode_payload(token: &str) -> Result<Map<String, Value>, DomainError> {
    let segments: Vec<&str> = token.split('.').collect();
    let payload = match segments.as_slice() {
        [_, payload, _] => *payload,
        [_, _, _, _, _] => {
            return Err(DomainError::malformed(
                "encrypted tokens are not supported, expected compact JWS",
            ));
        }
        _ => {
            return Err(DomainError::malformed(format!(
                "expected 3 dot-separated segments, found {}",
                segments.len()
            )));
        }
    };

    let bytes = BASE64URL
        .decode(payload)
        .map_err(|e| DomainError::malformed(format!("payload is not base64url: {e}")))?;

    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(claims)) => Ok(claims),
        Ok(_) => Err(DomainError::malformed("payload is not a JSON object")),
        Err(e) => Err(DomainError::malformed(format!("payload is not JSON: {e}"))),
    }
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{encode_segment, jwt};

    #[test]
    fn complete_claims_are_decoded() {
        let token = jwt(&json!({
            "sub": "user:default/alice",
            "ent": ["group:default/team-a", "group:default/team-b"],
        }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_entity_ref, "user:default/alice");
        assert_eq!(
            claims.ownership_entity_refs.as_deref(),
            Some(
                &[
                    "group:default/team-a".to_owned(),
                    "group:default/team-b".to_owned()
                ][..]
            )
        );
        assert!(claims.is_complete());
    }

    #[test]
    fn empty_ownership_is_complete() {
        let token = jwt(&json!({ "sub": "user:default/alice", "ent": [] }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.ownership_entity_refs, Some(Vec::new()));
    }

    #[test]
    fn absent_ownership_is_incomplete() {
        let token = jwt(&json!({ "sub": "user:default/alice" }));

        let claims = decode_claims(&token).unwrap();
        assert!(!claims.is_complete());
    }

    #[test]
    fn mixed_ownership_is_incomplete() {
        let token = jwt(&json!({ "sub": "user:default/alice", "ent": ["x", 5] }));

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.ownership_entity_refs, None);
    }

    #[test]
    fn non_array_ownership_is_incomplete() {
        let token = jwt(&json!({ "sub": "user:default/alice", "ent": "group:default/team-a" }));

        assert!(!decode_claims(&token).unwrap().is_complete());
    }

    #[test]
    fn numeric_subject_is_rejected() {
        let token = jwt(&json!({ "sub": 42, "ent": ["group:default/team-a"] }));

        assert!(matches!(
            decode_claims(&token).unwrap_err(),
            DomainError::InvalidSubjectClaim
        ));
    }

    #[test]
    fn missing_subject_is_rejected() {
        let token = jwt(&json!({ "ent": [] }));

        assert!(matches!(
            decode_claims(&token).unwrap_err(),
            DomainError::InvalidSubjectClaim
        ));
    }

    #[test]
    fn expired_and_unsigned_tokens_still_decode() {
        let header = encode_segment(&json!({ "alg": "none" }));
        let payload = encode_segment(&json!({ "sub": "user:default/alice", "exp": 1, "ent": [] }));
        let token = format!("{header}.{payload}.");

        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_entity_ref, "user:default/alice");
    }

    #[test]
    fn padded_payload_is_accepted() {
        let payload = BASE64URL.encode(br#"{"sub":"user:default/bob"}"#);
        let token = format!("e30.{payload}.sig");

        assert_eq!(
            decode_claims(&token).unwrap().user_entity_ref,
            "user:default/bob"
        );
    }

    #[test]
    fn opaque_token_is_malformed() {
        assert!(matches!(
            decode_claims("not-a-jwt").unwrap_err(),
            DomainError::MalformedToken { .. }
        ));
    }

    #[test]
    fn encrypted_token_is_malformed() {
        let err = decode_claims("a.b.c.d.e").unwrap_err();
        match err {
            DomainError::MalformedToken { reason } => assert!(reason.contains("encrypted")),
            other => panic!("Expected MalformedToken, got: {other:?}"),
        }
    }

    #[test]
    fn non_base64_payload_is_malformed() {
        assert!(matches!(
            decode_claims("e30.!!!.sig").unwrap_err(),
            DomainError::MalformedToken { .. }
        ));
    }

    #[test]
    fn non_object_payload_is_malformed() {
        let payload = encode_segment(&json!(["sub"]));
        let token = format!("e30.{payload}.sig");

        assert!(matches!(
            decode_claims(&token).unwrap_err(),
            DomainError::MalformedToken { .. }
        ));
    }

    #[test]
    fn non_json_payload_is_malformed() {
        let payload = BASE64URL.encode(b"hello");
        let token = format!("e30.{payload}.sig");

        assert!(matches!(
            decode_claims(&token).unwrap_err(),
            DomainError::MalformedToken { .. }
        ));
    }
}
