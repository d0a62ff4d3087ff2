//! Shared types used across the TenantShare workspace.

pub mod audit;
pub mod envelope;

pub use audit::AuditEvent;
pub use envelope::Envelope;
