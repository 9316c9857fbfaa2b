//! Cursor-paginated response envelope.

use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated listing.
///
/// Pass [`Page::next_cursor`] back as the `cursor` of the next list call to
/// continue; `has_more == false` means the listing is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in server order.
    pub items: Vec<T>,
    /// Cursor for the next page, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// Whether more pages follow this one.
    #[serde(default)]
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
