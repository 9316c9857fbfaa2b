//! Capture-bin models.

use serde::{Deserialize, Serialize};

/// A capture bin: a disposable endpoint that records every HTTP request
/// sent to its capture URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Server-assigned identifier.
    pub id: String,
    /// Human-readable label, if one was given at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The URL traffic should be pointed at to be captured.
    pub capture_url: String,
    /// Whether the bin's contents are readable without a credential.
    #[serde(default)]
    pub public: bool,
    /// Number of requests currently held by the bin.
    #[serde(default)]
    pub request_count: u64,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 expiry timestamp; `None` means the bin does not expire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Payload for creating a bin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateBinRequest {
    /// Optional human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Make the bin readable without a credential.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub public: bool,
    /// Lifetime in seconds; the server default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<u64>,
}

/// Pagination parameters for listing bins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListBinsRequest {
    /// Opaque cursor from a previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size; the server clamps out-of-range values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_deserializes_with_optional_fields_absent() {
        let bin: Bin = serde_json::from_str(
            r#"{
                "id": "bin_123",
                "capture_url": "https://in.catchall.dev/bin_123",
                "created_at": "2026-08-30T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(bin.id, "bin_123");
        assert_eq!(bin.name, None);
        assert!(!bin.public);
        assert_eq!(bin.request_count, 0);
    }

    #[test]
    fn create_request_omits_defaults_on_the_wire() {
        let body = serde_json::to_value(CreateBinRequest::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }
}
