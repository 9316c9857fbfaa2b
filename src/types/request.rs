//! Captured-request models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One HTTP request captured by a bin, as the capture endpoint saw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedRequest {
    /// Server-assigned identifier.
    pub id: String,
    /// Identifier of the owning bin.
    pub bin_id: String,
    /// HTTP method of the captured request.
    pub method: String,
    /// Path plus query string as received.
    pub path: String,
    /// Request headers. Multi-valued headers are comma-joined by the server.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Request body, UTF-8 lossy; `None` for bodyless requests. Binary
    /// bodies are surfaced base64-encoded with `body_encoding = "base64"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// `"utf8"` or `"base64"`; absent means `"utf8"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_encoding: Option<String>,
    /// Remote address the request arrived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    /// RFC 3339 capture timestamp.
    pub received_at: String,
}

/// Filter and pagination parameters for listing captured requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRequestsRequest {
    /// Opaque cursor from a previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size; the server clamps out-of-range values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only return requests with this HTTP method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}
