use crate::client::core::CatchAllClient;
use crate::config::ClientOptions;
use crate::environments::Environment;
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface small and predictable; it is a fluent veneer over
/// [`ClientOptions`].
pub struct CatchAllClientBuilder {
    options: ClientOptions,
}

impl CatchAllClientBuilder {
    pub fn new() -> Self {
        Self {
            options: ClientOptions::new(),
        }
    }

    /// Target a named environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.options.environment = environment;
        self
    }

    /// Override the base URL from the environment preset.
    ///
    /// Primarily for testing with mock servers and for self-hosted
    /// deployments.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.options.base_url = Some(base_url.into());
        self
    }

    /// Set the bearer credential. When unset, `CATCHALL_API_KEY` is
    /// consulted at build time.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.options.api_key = Some(api_key.into());
        self
    }

    /// Set the per-attempt deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Set the retry budget for transient failures.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.options.max_retries = max_retries;
        self
    }

    /// Add a header sent on every call.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.headers.insert(name.into(), value.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CatchAllClient> {
        CatchAllClient::new(self.options)
    }
}

impl Default for CatchAllClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
