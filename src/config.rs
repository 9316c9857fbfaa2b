//! Client-level and per-call configuration.
//!
//! Two layers, standard override semantics: [`ClientOptions`] is fixed for
//! the client's lifetime, [`RequestOptions`] is consumed once per call and
//! overrides — but never replaces — the client layer. The merged view a
//! single call actually runs with is [`CallOptions`].

use crate::environments::Environment;
use std::collections::HashMap;
use std::time::Duration;

/// Environment variable consulted for the credential when
/// [`ClientOptions::api_key`] is unset.
pub const API_KEY_ENV: &str = "CATCHALL_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Construction-time configuration for [`CatchAllClient`](crate::CatchAllClient).
///
/// Immutable for the client's lifetime. Keep this surface small and
/// predictable; anything call-specific belongs in [`RequestOptions`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Which deployment to target. Ignored when `base_url` is set.
    pub environment: Environment,
    /// Override the environment preset (self-hosted deployments, mock
    /// servers in tests).
    pub base_url: Option<String>,
    /// Bearer credential. Falls back to the `CATCHALL_API_KEY` environment
    /// variable at client build time; unauthenticated clients are allowed
    /// (public bins).
    pub api_key: Option<String>,
    /// Per-attempt deadline.
    pub timeout: Duration,
    /// Retry budget for transient failures (429, 5xx, timeouts).
    pub max_retries: u32,
    /// Headers sent on every call.
    pub headers: HashMap<String, String>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self {
            environment: Environment::default(),
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            headers: HashMap::new(),
        }
    }

    /// Target a named environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL entirely (primarily for testing with mock
    /// servers and for self-hosted deployments).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the bearer credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the per-attempt deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry budget for transient failures.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Add a header sent on every call.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Effective base URL, preset or override, without a trailing slash.
    pub fn effective_base_url(&self) -> String {
        let url = self
            .base_url
            .clone()
            .unwrap_or_else(|| self.environment.base_url().to_string());
        url.trim_end_matches('/').to_string()
    }

    /// Credential from options, falling back to `CATCHALL_API_KEY`.
    pub fn effective_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
    }

    /// Merge per-call overrides over this layer.
    pub fn resolve(&self, request: &RequestOptions) -> CallOptions {
        let mut headers = self.headers.clone();
        for (name, value) in &request.headers {
            headers.insert(name.clone(), value.clone());
        }
        CallOptions {
            timeout: request.timeout.unwrap_or(self.timeout),
            max_retries: request.max_retries.unwrap_or(self.max_retries),
            headers,
        }
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-call override configuration. Created by the caller per invocation
/// and consumed once; unset fields fall back to the client layer.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Override the per-attempt deadline for this call only.
    pub timeout: Option<Duration>,
    /// Override the retry budget for this call only.
    pub max_retries: Option<u32>,
    /// Additional headers for this call; win over client headers on
    /// name collisions.
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// The merged configuration a single call runs with.
#[derive(Debug, Clone)]
pub struct CallOptions {
    pub timeout: Duration,
    pub max_retries: u32,
    pub headers: HashMap<String, String>,
}
