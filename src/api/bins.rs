//! Bin lifecycle operations.

use crate::config::RequestOptions;
use crate::transport::{HttpTransport, Method};
use crate::types::{Bin, CreateBinRequest, ListBinsRequest, Page};
use crate::Result;
use std::sync::Arc;

/// Handle for the `bins` operation group.
pub struct BinsClient {
    transport: Arc<HttpTransport>,
}

impl BinsClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a new capture bin.
    pub async fn create(&self, request: CreateBinRequest) -> Result<Bin> {
        self.create_with_options(request, RequestOptions::default())
            .await
    }

    pub async fn create_with_options(
        &self,
        request: CreateBinRequest,
        options: RequestOptions,
    ) -> Result<Bin> {
        let body = serde_json::to_value(&request)?;
        self.transport
            .execute_json("bins.create", Method::Post, "/v1/bins", &[], Some(&body), &options)
            .await
    }

    /// Fetch a bin by id.
    pub async fn get(&self, bin_id: &str) -> Result<Bin> {
        self.get_with_options(bin_id, RequestOptions::default()).await
    }

    pub async fn get_with_options(&self, bin_id: &str, options: RequestOptions) -> Result<Bin> {
        let path = format!("/v1/bins/{bin_id}");
        self.transport
            .execute_json("bins.get", Method::Get, &path, &[], None, &options)
            .await
    }

    /// List bins, one page at a time.
    pub async fn list(&self, request: ListBinsRequest) -> Result<Page<Bin>> {
        self.list_with_options(request, RequestOptions::default())
            .await
    }

    pub async fn list_with_options(
        &self,
        request: ListBinsRequest,
        options: RequestOptions,
    ) -> Result<Page<Bin>> {
        let mut query = Vec::new();
        if let Some(cursor) = request.cursor {
            query.push(("cursor", cursor));
        }
        if let Some(limit) = request.limit {
            query.push(("limit", limit.to_string()));
        }
        self.transport
            .execute_json("bins.list", Method::Get, "/v1/bins", &query, None, &options)
            .await
    }

    /// Delete a bin and everything it captured.
    pub async fn delete(&self, bin_id: &str) -> Result<()> {
        self.delete_with_options(bin_id, RequestOptions::default())
            .await
    }

    pub async fn delete_with_options(&self, bin_id: &str, options: RequestOptions) -> Result<()> {
        let path = format!("/v1/bins/{bin_id}");
        self.transport
            .execute_empty("bins.delete", Method::Delete, &path, &options)
            .await
    }
}
