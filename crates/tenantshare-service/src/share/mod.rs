//! Tenant-scoped access to the remote share service.

pub mod action;
pub mod client;
pub mod rewrite;
pub mod scope;
pub mod types;

pub use action::ShareAction;
pub use client::{Lookup, ShareClient};
pub use scope::TenantScope;
