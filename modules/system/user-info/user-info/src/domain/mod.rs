//! Domain layer for the user info module.

pub mod claims;
pub mod credentials;
pub mod error;
pub mod local_client;
pub mod service;

pub use claims::{TokenClaims, decode_claims};
pub use credentials::{UserToken, unwrap_user_token};
pub use error::DomainError;
pub use local_client::UserInfoLocalClient;
pub use service::Service;
