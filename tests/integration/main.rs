//! End-to-end tests driving the HTTP router against a mocked cloud.

mod helpers;

mod audit_test;
mod share_test;
mod upload_test;
