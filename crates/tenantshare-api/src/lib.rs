//! # tenantshare-api
//!
//! HTTP API layer for TenantShare built on Axum.
//!
//! Exposes the tenant-facing share action endpoint, uploads, the audit
//! search proxy, redaction, and health, together with middleware (CORS,
//! compression, tracing, request logging), the tenant session extractor,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
