use crate::api::bins::BinsClient;
use crate::api::requests::RequestsClient;
use crate::client::builder::CatchAllClientBuilder;
use crate::config::ClientOptions;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use tracing::debug;

/// The CatchAll API client.
///
/// Composes the grouped operation namespace with configuration. Cheap to
/// clone; all clones share one connection pool.
#[derive(Clone)]
pub struct CatchAllClient {
    transport: Arc<HttpTransport>,
}

impl CatchAllClient {
    /// Build a client from construction-time options.
    ///
    /// Fails only on invalid configuration (e.g. an unparseable base URL);
    /// no network I/O happens here.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(options)?);
        debug!(base_url = transport.base_url(), "client constructed");
        Ok(Self { transport })
    }

    /// Fluent construction.
    pub fn builder() -> CatchAllClientBuilder {
        CatchAllClientBuilder::new()
    }

    /// Bin lifecycle operations.
    pub fn bins(&self) -> BinsClient {
        BinsClient::new(Arc::clone(&self.transport))
    }

    /// Captured-request inspection operations.
    pub fn requests(&self) -> RequestsClient {
        RequestsClient::new(Arc::clone(&self.transport))
    }

    /// The effective construction-time configuration.
    pub fn options(&self) -> &ClientOptions {
        self.transport.options()
    }

    /// The base URL calls are issued against.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}
