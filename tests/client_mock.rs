//! Wire-level integration tests against a mockito server double.
//!
//! These cover what the unit tests cannot: auth headers on the wire, JSON
//! round-trips, status-to-error mapping, the retry budget, and deadline
//! enforcement.

use catchall_api::{
    ApiError, CatchAllClient, CreateBinRequest, ListRequestsRequest, RequestOptions,
};
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;

fn client_for(server: &mockito::ServerGuard) -> CatchAllClient {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    CatchAllClient::builder()
        .base_url(server.url())
        .api_key("test-key")
        .max_retries(0)
        .build()
        .expect("client construction")
}

#[tokio::test]
async fn create_bin_sends_auth_and_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/bins")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Json(json!({"name": "smoke"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "bin_1",
                "name": "smoke",
                "capture_url": "https://in.catchall.dev/bin_1",
                "created_at": "2026-08-30T12:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let bin = client
        .bins()
        .create(CreateBinRequest {
            name: Some("smoke".into()),
            ..Default::default()
        })
        .await
        .expect("create bin");

    assert_eq!(bin.id, "bin_1");
    assert_eq!(bin.name.as_deref(), Some("smoke"));
    mock.assert_async().await;
}

#[tokio::test]
async fn list_requests_passes_filters_as_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/bins/bin_1/requests")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("method".into(), "POST".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [
                    {
                        "id": "req_1",
                        "bin_id": "bin_1",
                        "method": "POST",
                        "path": "/hook",
                        "received_at": "2026-08-30T12:00:01Z"
                    },
                    {
                        "id": "req_2",
                        "bin_id": "bin_1",
                        "method": "POST",
                        "path": "/hook",
                        "received_at": "2026-08-30T12:00:02Z"
                    }
                ],
                "next_cursor": "c2",
                "has_more": true
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let page = client
        .requests()
        .list(
            "bin_1",
            ListRequestsRequest {
                limit: Some(2),
                method: Some("POST".into()),
                ..Default::default()
            },
        )
        .await
        .expect("list requests");

    assert_eq!(page.len(), 2);
    assert!(page.has_more);
    assert_eq!(page.next_cursor.as_deref(), Some("c2"));
    assert_eq!(page.items[0].id, "req_1");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_maps_to_status_error_with_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/bins/nope")
        .with_status(404)
        .with_body(r#"{"error":"bin not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.bins().get("nope").await.err().expect("should fail");

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("bin not found"));
        }
        other => panic!("expected status error, got: {other}"),
    }
}

#[tokio::test]
async fn transient_failures_consume_the_retry_budget() {
    let mut server = mockito::Server::new_async().await;
    // 1 initial attempt + 2 retries.
    let mock = server
        .mock("DELETE", "/v1/bins/bin_1")
        .with_status(503)
        .with_body("overloaded")
        .expect(3)
        .create_async()
        .await;

    let client = CatchAllClient::builder()
        .base_url(server.url())
        .max_retries(2)
        .build()
        .expect("client construction");

    let err = client.bins().delete("bin_1").await.err().expect("should fail");
    assert_eq!(err.status(), Some(503));
    assert!(err.is_retryable());
    mock.assert_async().await;
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/bins/bin_1")
        .with_status(403)
        .with_body("forbidden")
        .expect(1)
        .create_async()
        .await;

    let client = CatchAllClient::builder()
        .base_url(server.url())
        .max_retries(5)
        .build()
        .expect("client construction");

    let err = client.bins().get("bin_1").await.err().expect("should fail");
    assert_eq!(err.status(), Some(403));
    mock.assert_async().await;
}

#[tokio::test]
async fn per_call_headers_win_over_client_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/bins/bin_1")
        .match_header("x-team", "infra")
        .match_header("x-trace", "call")
        .with_status(200)
        .with_body(
            json!({
                "id": "bin_1",
                "capture_url": "https://in.catchall.dev/bin_1",
                "created_at": "2026-08-30T12:00:00Z"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = CatchAllClient::builder()
        .base_url(server.url())
        .header("x-team", "infra")
        .header("x-trace", "client")
        .max_retries(0)
        .build()
        .expect("client construction");

    let bin = client
        .bins()
        .get_with_options("bin_1", RequestOptions::new().with_header("x-trace", "call"))
        .await
        .expect("get bin");

    assert_eq!(bin.id, "bin_1");
    mock.assert_async().await;
}

#[tokio::test]
async fn unresponsive_server_surfaces_a_timeout_error() {
    // A listener that accepts connections but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let _hold = tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        }
    });

    let client = CatchAllClient::builder()
        .base_url(format!("http://{addr}"))
        .timeout(Duration::from_millis(200))
        .max_retries(0)
        .build()
        .expect("client construction");

    let err = client.bins().get("bin_1").await.err().expect("should time out");
    assert!(err.is_timeout());
    match err {
        ApiError::Timeout(timeout) => {
            assert_eq!(timeout.operation, "bins.get");
            assert_eq!(timeout.timeout, Duration::from_millis(200));
        }
        other => panic!("expected timeout, got: {other}"),
    }
}

#[tokio::test]
async fn per_call_timeout_overrides_client_timeout() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let _hold = tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        }
    });

    let client = CatchAllClient::builder()
        .base_url(format!("http://{addr}"))
        .timeout(Duration::from_secs(60))
        .max_retries(0)
        .build()
        .expect("client construction");

    let started = std::time::Instant::now();
    let err = client
        .bins()
        .get_with_options(
            "bin_1",
            RequestOptions::new().with_timeout(Duration::from_millis(150)),
        )
        .await
        .err()
        .expect("should time out");

    assert!(err.is_timeout());
    // Must honor the per-call deadline, not the 60s client default.
    assert!(started.elapsed() < Duration::from_secs(10));
}
