//! # tenantshare-remote
//!
//! Outbound side of TenantShare: a bearer-authenticated JSON/multipart
//! transport that transparently resolves asynchronous (202) responses, a
//! vault client that resolves the service token, and the token sources
//! that plug one into the other.

pub mod body;
pub mod response;
pub mod token;
pub mod transport;
pub mod vault;

pub use body::{FormPart, MultipartBody, RequestBody};
pub use response::RemoteResponse;
pub use token::{ServiceToken, StaticToken};
pub use transport::{HttpTransport, TransportOptions};
pub use vault::VaultClient;
