//! # Types Module
//!
//! Wire-level model types for the CatchAll API. Everything public here is
//! re-exported wholesale from the crate root.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Bin`] | A capture bin and its metadata |
//! | [`CreateBinRequest`] | Payload for creating a bin |
//! | [`ListBinsRequest`] | Pagination parameters for listing bins |
//! | [`CapturedRequest`] | One HTTP request captured by a bin |
//! | [`ListRequestsRequest`] | Filter/pagination for captured requests |
//! | [`Page`] | Cursor-paginated response envelope |

pub mod bin;
pub mod page;
pub mod request;

pub use bin::{Bin, CreateBinRequest, ListBinsRequest};
pub use page::Page;
pub use request::{CapturedRequest, ListRequestsRequest};
