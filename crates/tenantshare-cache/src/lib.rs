//! # tenantshare-cache
//!
//! Service token cache implementations for TenantShare. Supports two modes:
//!
//! - **memory**: process-lifetime map using [dashmap](https://crates.io/crates/dashmap);
//!   entries are never invalidated, which suits short-lived processes
//! - **expiring**: bounded cache with a TTL using [moka](https://crates.io/crates/moka),
//!   for long-lived servers where revoked tokens must eventually be refetched
//!
//! The provider is selected at runtime based on configuration.

#[cfg(feature = "expiring")]
pub mod expiring;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;

pub use provider::TokenCacheManager;
