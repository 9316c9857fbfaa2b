//! # catchall-api
//!
//! Async Rust client for the CatchAll request-capture API.
//!
//! CatchAll gives you disposable "bins": point any HTTP traffic at a bin's
//! capture URL and inspect what arrived through this client. The crate
//! exposes a single entry point, [`CatchAllClient`], plus a grouped
//! operation namespace under [`api`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catchall_api::{CatchAllClient, ClientOptions, CreateBinRequest};
//!
//! #[tokio::main]
//! async fn main() -> catchall_api::Result<()> {
//!     let client = CatchAllClient::new(
//!         ClientOptions::new().with_api_key("your-api-key"),
//!     )?;
//!
//!     let bin = client.bins().create(CreateBinRequest {
//!         name: Some("smoke-test".into()),
//!         ..Default::default()
//!     }).await?;
//!
//!     let captured = client.requests().list(&bin.id, Default::default()).await?;
//!     println!("{} requests captured", captured.items.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Grouped API operations (`api::bins`, `api::requests`) |
//! | [`client`] | Client entry point and builder |
//! | [`config`] | Client-level and per-call configuration |
//! | [`environments`] | Named backend environment presets |
//! | [`error`] | Error taxonomy (general and timeout) |
//! | [`transport`] | HTTP execution layer |
//! | [`types`] | Request/response model types |
//!
//! ## Error Handling
//!
//! Every operation returns [`Result`]. A call that misses its deadline fails
//! with [`TimeoutError`], surfaced as [`ApiError::Timeout`], so callers can
//! branch on timeout vs. other failures:
//!
//! ```rust
//! use catchall_api::ApiError;
//!
//! fn describe(err: &ApiError) -> &'static str {
//!     match err {
//!         ApiError::Timeout(_) => "deadline exceeded, maybe widen the timeout",
//!         ApiError::Status { status, .. } if *status == 404 => "no such bin",
//!         _ => "something else went wrong",
//!     }
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod environments;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{CatchAllClient, CatchAllClientBuilder};
pub use config::{ClientOptions, RequestOptions};
pub use environments::Environment;
pub use error::{ApiError, TimeoutError};

// Model types pass through wholesale: anything added to `types` is part of
// the crate root surface without touching this file.
pub use types::*;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ApiError>;
