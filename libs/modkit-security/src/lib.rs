#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod credentials;

pub use credentials::{Credentials, CredentialsBuilder, Principal, PrincipalKind};
