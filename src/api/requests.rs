//! Captured-request inspection operations.

use crate::config::RequestOptions;
use crate::transport::{HttpTransport, Method};
use crate::types::{CapturedRequest, ListRequestsRequest, Page};
use crate::Result;
use std::sync::Arc;

/// Handle for the `requests` operation group.
pub struct RequestsClient {
    transport: Arc<HttpTransport>,
}

impl RequestsClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the requests a bin has captured, newest first.
    pub async fn list(
        &self,
        bin_id: &str,
        request: ListRequestsRequest,
    ) -> Result<Page<CapturedRequest>> {
        self.list_with_options(bin_id, request, RequestOptions::default())
            .await
    }

    pub async fn list_with_options(
        &self,
        bin_id: &str,
        request: ListRequestsRequest,
        options: RequestOptions,
    ) -> Result<Page<CapturedRequest>> {
        let path = format!("/v1/bins/{bin_id}/requests");
        let mut query = Vec::new();
        if let Some(cursor) = request.cursor {
            query.push(("cursor", cursor));
        }
        if let Some(limit) = request.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(method) = request.method {
            query.push(("method", method));
        }
        self.transport
            .execute_json("requests.list", Method::Get, &path, &query, None, &options)
            .await
    }

    /// Fetch one captured request.
    pub async fn get(&self, bin_id: &str, request_id: &str) -> Result<CapturedRequest> {
        self.get_with_options(bin_id, request_id, RequestOptions::default())
            .await
    }

    pub async fn get_with_options(
        &self,
        bin_id: &str,
        request_id: &str,
        options: RequestOptions,
    ) -> Result<CapturedRequest> {
        let path = format!("/v1/bins/{bin_id}/requests/{request_id}");
        self.transport
            .execute_json("requests.get", Method::Get, &path, &[], None, &options)
            .await
    }

    /// Drop everything the bin has captured, keeping the bin itself.
    pub async fn clear(&self, bin_id: &str) -> Result<()> {
        self.clear_with_options(bin_id, RequestOptions::default())
            .await
    }

    pub async fn clear_with_options(&self, bin_id: &str, options: RequestOptions) -> Result<()> {
        let path = format!("/v1/bins/{bin_id}/requests");
        self.transport
            .execute_empty("requests.clear", Method::Delete, &path, &options)
            .await
    }
}
