//! Trait seams shared across crates.
//!
//! These traits are defined here so that the remote, service, and API
//! crates can depend on abstractions rather than concrete providers.

pub mod audit;
pub mod cache;
pub mod token;

pub use audit::AuditSink;
pub use cache::TokenCache;
pub use token::TokenSource;
