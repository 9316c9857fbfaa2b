//! Error taxonomy for the CatchAll client.
//!
//! Two identifiers matter to callers: [`ApiError`], the general failure
//! type every operation returns, and [`TimeoutError`], the specialization
//! signaling that a call did not complete within its deadline. A timeout is
//! still an `ApiError` (via the `Timeout` variant), so `match` discriminates
//! the two without losing the common error path.

use std::time::Duration;
use thiserror::Error;

/// An operation did not receive a response within its allotted duration.
#[derive(Debug, Error)]
#[error("request to {operation} timed out after {timeout:?}")]
pub struct TimeoutError {
    /// Logical operation that was in flight (e.g. "bins.create").
    pub operation: String,
    /// The deadline that elapsed.
    pub timeout: Duration,
}

impl TimeoutError {
    pub fn new(operation: impl Into<String>, timeout: Duration) -> Self {
        Self {
            operation: operation.into(),
            timeout,
        }
    }
}

/// Unified error type for the CatchAll client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The per-call deadline elapsed before a response arrived.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a well-formed HTTP exchange
    /// (DNS, TLS, connection reset, malformed response framing).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The client was constructed or invoked with invalid configuration.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl ApiError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        ApiError::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status of the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error is the timeout specialization.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }

    /// Whether retrying the same call may succeed.
    ///
    /// Timeouts, connect-level transport failures, 429 and 5xx are
    /// transient; other 4xx failures will fail identically on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Timeout(_) => true,
            ApiError::Status { status, .. } => *status == 429 || *status >= 500,
            ApiError::Transport(e) => e.is_connect() || e.is_timeout(),
            ApiError::Serialization(_) | ApiError::Configuration { .. } => false,
        }
    }
}
