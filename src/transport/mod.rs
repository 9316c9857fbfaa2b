//! HTTP execution layer.
//!
//! [`HttpTransport`] owns the connection pool and runs every API call:
//! header layering, bearer auth, per-attempt deadlines, and the bounded
//! retry loop for transient failures. Operation groups in [`crate::api`]
//! are thin wrappers over it.

mod http;

pub use http::{HttpTransport, Method};
