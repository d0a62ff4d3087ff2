//! # tenantshare-core
//!
//! Core crate for TenantShare. Contains configuration schemas, the remote
//! response envelope, audit event types, the seams shared by the other
//! crates (token cache, token source, audit sink), and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other TenantShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
