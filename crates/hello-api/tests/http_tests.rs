//! HTTP surface tests for both router variants.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use hello_api::{AppState, ServerError, router, traced_router};
use tokio::net::TcpListener;

/// Start a router on an ephemeral port and return its address.
async fn start_test_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().expect("failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    addr
}

fn state(greeting: &str) -> Arc<AppState> {
    Arc::new(AppState::new(greeting))
}

#[tokio::test]
async fn test_healthz_returns_ok() {
    let addr = start_test_server(router(state("Hello!"))).await;

    let resp = reqwest::get(format!("http://{addr}/healthz"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
async fn test_root_returns_fixed_greeting() {
    let addr = start_test_server(router(state("Hello from hello-full with OTel!"))).await;

    for _ in 0..3 {
        let body = reqwest::get(format!("http://{addr}/"))
            .await
            .expect("request failed")
            .text()
            .await
            .expect("body");
        assert_eq!(body, "Hello from hello-full with OTel!");
    }
}

#[tokio::test]
async fn test_traced_router_serves_the_same_surface() {
    let addr = start_test_server(traced_router(state("Hello from hello-lite!"))).await;

    let health = reqwest::get(format!("http://{addr}/healthz"))
        .await
        .expect("request failed");
    assert_eq!(health.status(), reqwest::StatusCode::OK);
    assert_eq!(health.text().await.expect("body"), "ok");

    let root = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("request failed");
    assert_eq!(root.status(), reqwest::StatusCode::OK);
    assert_eq!(root.text().await.expect("body"), "Hello from hello-lite!");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let addr = start_test_server(router(state("Hello!"))).await;

    let resp = reqwest::get(format!("http://{addr}/nope"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_root_requests_each_get_the_greeting() {
    let addr = start_test_server(traced_router(state("Hello from hello-lite!"))).await;

    let mut handles = Vec::new();
    for _ in 0..16 {
        handles.push(tokio::spawn(async move {
            reqwest::get(format!("http://{addr}/"))
                .await
                .expect("request failed")
                .text()
                .await
                .expect("body")
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.expect("task panicked"), "Hello from hello-lite!");
    }
}

#[tokio::test]
async fn test_serve_reports_bind_failure() {
    let taken = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = taken.local_addr().expect("failed to read local addr");

    let err = hello_api::serve(router(state("Hello!")), addr, async {})
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }));
}

#[tokio::test]
async fn test_serve_stops_when_shutdown_resolves() {
    let addr: SocketAddr = "127.0.0.1:0".parse().expect("addr");
    let result = hello_api::serve(router(state("Hello!")), addr, async {}).await;
    assert!(result.is_ok());
}
