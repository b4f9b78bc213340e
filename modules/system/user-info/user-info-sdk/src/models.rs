//! Domain models for the `user_info` module.

use serde::{Deserialize, Serialize};

/// Identity of a user, as needed for ownership checks.
///
/// The shape is the same whether the data came from the token itself or
/// from the identity authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Entity reference of the user, e.g. `user:default/alice`.
    pub user_entity_ref: String,

    /// Entity references the user is considered to own, in issuer order.
    /// May be empty.
    pub ownership_entity_refs: Vec<String>,
}
