//! User Info Module
//!
//! Resolves the identity of a user (their entity reference and the entity
//! references they own) from the credentials of a request.
//!
//! Tokens minted with a complete ownership claim are answered locally.
//! Otherwise the module asks the identity authority (the `auth` service,
//! located through discovery) via `GET /v1/userinfo`.
//!
//! Provides the `UserInfoClient` implementation consumed by other modules.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

#[cfg(test)]
mod test_support;

pub use config::UserInfoConfig;
pub use domain::{TokenClaims, decode_claims};
pub use module::{UserInfoDeps, UserInfoModule};
