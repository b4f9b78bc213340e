//! Domain layer for static discovery.

pub mod client;
pub mod service;

pub use service::StaticDiscovery;
