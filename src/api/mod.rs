//! Grouped API operations.
//!
//! Each group is a handle over the client's shared transport, reachable
//! either through this namespace (`api::bins::BinsClient`) or through the
//! accessors on [`CatchAllClient`](crate::CatchAllClient)
//! (`client.bins()`, `client.requests()`).
//!
//! | Group | Operations |
//! |-------|------------|
//! | [`bins`] | `create`, `get`, `list`, `delete` |
//! | [`requests`] | `list`, `get`, `clear` |
//!
//! Every operation has a `*_with_options` variant taking a per-call
//! [`RequestOptions`](crate::RequestOptions); the plain method delegates
//! with defaults.

pub mod bins;
pub mod requests;
