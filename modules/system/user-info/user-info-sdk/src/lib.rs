//! User Info SDK
//!
//! This crate provides the public API for the `user_info` module:
//!
//! - [`UserInfoClient`] - Public API trait for consumers
//! - [`UserInfo`] - Resolved identity of a user
//! - [`UserInfoError`] - Error types
//! - [`ResponseError`] - Detail of a failed call to the identity authority
//!
//! ## Usage
//!
//! ```ignore
//! use user_info_sdk::UserInfoClient;
//!
//! let info = user_info.get_user_info(&credentials).await?;
//! if info.ownership_entity_refs.contains(&owner) {
//!     // caller owns the entity
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::UserInfoClient;
pub use error::{ResponseError, UserInfoError};
pub use models::UserInfo;
