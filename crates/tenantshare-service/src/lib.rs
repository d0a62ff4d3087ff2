//! # tenantshare-service
//!
//! Service layer for TenantShare. The share client maps every
//! (organization, user) pair onto a private subtree of the remote object
//! store, rewriting inbound paths and filters and stripping the tenant
//! prefix from everything it returns. The audit and redact clients wrap
//! the remaining remote services.
//!
//! Services follow constructor injection: every dependency is provided
//! at construction time, transports via `Arc` references.

pub mod audit;
pub mod redact;
pub mod session;
pub mod share;

pub use audit::{AuditClient, DisabledAudit};
pub use redact::RedactClient;
pub use session::SessionIdentity;
pub use share::{ShareAction, ShareClient, TenantScope};
