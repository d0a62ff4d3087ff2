//! HTTP request handlers.

pub mod audit;
pub mod health;
pub mod redact;
pub mod share;
pub mod upload;
