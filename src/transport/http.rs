use crate::config::{CallOptions, ClientOptions, RequestOptions};
use crate::error::{ApiError, TimeoutError};
use crate::Result;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

static USER_AGENT: Lazy<String> =
    Lazy::new(|| format!("catchall-api-rust/{}", env!("CARGO_PKG_VERSION")));

// Exponential backoff bounds for the retry loop.
const BACKOFF_BASE: Duration = Duration::from_millis(250);
const BACKOFF_CAP: Duration = Duration::from_secs(4);

/// HTTP verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    options: ClientOptions,
}

impl HttpTransport {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let base_url = options.effective_base_url();
        url::Url::parse(&base_url)
            .map_err(|e| ApiError::configuration(format!("invalid base URL {base_url:?}: {e}")))?;

        let api_key = options.effective_api_key();

        // The per-call deadline is enforced in execute(); the pool-level
        // client only gets a connect timeout so slow calls stay governable
        // per request.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(32)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .user_agent(USER_AGENT.as_str())
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url,
            api_key,
            options,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Execute a call and decode the JSON response body.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
        request_options: &RequestOptions,
    ) -> Result<T> {
        let text = self
            .execute(operation, method, path, query, body, request_options)
            .await?;
        serde_json::from_str(&text).map_err(ApiError::Serialization)
    }

    /// Execute a call whose response body is ignored (deletes, clears).
    pub async fn execute_empty(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        request_options: &RequestOptions,
    ) -> Result<()> {
        self.execute(operation, method, path, &[], None, request_options)
            .await?;
        Ok(())
    }

    async fn execute(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
        request_options: &RequestOptions,
    ) -> Result<String> {
        let call = self.options.resolve(request_options);
        let url = format!("{}{}", self.base_url, path);

        let mut attempt: u32 = 0;
        loop {
            debug!(operation, %url, attempt, "executing request");
            let result = self.attempt(operation, method, &url, query, body, &call).await;

            match result {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() && attempt < call.max_retries => {
                    let delay = backoff(attempt);
                    warn!(operation, attempt, ?delay, error = %err, "retrying after transient failure");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn attempt(
        &self,
        operation: &str,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
        call: &CallOptions,
    ) -> Result<String> {
        let mut req = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Delete => self.client.delete(url),
        };

        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }
        for (name, value) in &call.headers {
            req = req.header(name, value);
        }

        let send = async {
            let response = req.send().await.map_err(ApiError::Transport)?;
            let status = response.status();
            let text = response.text().await.map_err(ApiError::Transport)?;
            if status.is_success() {
                Ok(text)
            } else {
                Err(ApiError::Status {
                    status: status.as_u16(),
                    body: text,
                })
            }
        };

        match tokio::time::timeout(call.timeout, send).await {
            Ok(result) => result,
            Err(_) => Err(TimeoutError::new(operation, call.timeout).into()),
        }
    }
}

// Exponential backoff: base * 2^attempt, capped.
fn backoff(attempt: u32) -> Duration {
    let base = BACKOFF_BASE.as_millis() as u64;
    let cap = BACKOFF_CAP.as_millis() as u64;
    let delay = base.saturating_mul(1u64 << attempt.min(16)).min(cap);
    Duration::from_millis(delay)
}
