use axum::body::Body;
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::{app_state, build_router};

/// Router with default settings: incomplete renders are rejected.
pub fn test_router() -> Router {
    build_router(app_state(&ServerConfig::default()))
}

/// Router that fills missing placeholders with `default`.
pub fn test_router_with_default(default: &str) -> Router {
    let config = ServerConfig {
        missing_default: Some(default.to_string()),
        ..Default::default()
    };
    build_router(app_state(&config))
}

/// Collect a response body as JSON.
pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = test_router();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
