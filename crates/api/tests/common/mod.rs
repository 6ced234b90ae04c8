//! Shared helpers for API integration tests.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the
//! router without an actual TCP listener; `serve()` binds a real
//! listener for the WebSocket tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use printseed_api::config::ServerConfig;
use printseed_api::router::build_app_router;
use printseed_api::settings::SettingsStore;
use printseed_api::state::AppState;
use printseed_api::uploads::UploadStore;
use printseed_client::{JobDispatcher, PrintApi};
use printseed_session::SessionRegistry;

/// Build a test `ServerConfig` with safe defaults and unique temp paths.
pub fn test_config() -> ServerConfig {
    let unique = uuid::Uuid::new_v4();
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        upload_dir: std::env::temp_dir().join(format!("printseed-test-uploads-{unique}")),
        settings_path: std::env::temp_dir().join(format!("printseed-test-settings-{unique}.json")),
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub async fn build_test_app() -> Router {
    let config = test_config();
    build_app_with_config(config).await
}

pub async fn build_app_with_config(config: ServerConfig) -> Router {
    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .expect("Failed to create test upload dir");

    let state = AppState {
        registry: Arc::new(SessionRegistry::new()),
        dispatcher: Arc::new(JobDispatcher::new(PrintApi::with_timeout(
            Duration::from_secs(5),
        ))),
        settings: Arc::new(SettingsStore::new(config.settings_path.clone())),
        uploads: Arc::new(UploadStore::new(config.upload_dir.clone())),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Serve an app on an ephemeral local port, for tests that need a real
/// socket (WebSocket upgrades). The serve task is detached.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Mock print ingestion endpoint answering every POST with `status`.
pub async fn mock_print_endpoint(status: StatusCode) -> String {
    let router = Router::new().route("/print", post(move || async move { (status, "accepted") }));
    let addr = serve(router).await;
    format!("http://{addr}/print")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}

/// Minimal session creation body: one generate-sourced industry.
pub fn session_body(endpoint: &str, num_jobs: usize) -> serde_json::Value {
    serde_json::json!({
        "endpoint": endpoint,
        "auth_token": "",
        "timing_mode": "fixed",
        "fixed_delay": 0.0,
        "industries": {
            "healthcare": {
                "num_jobs": num_jobs,
                "usernames": "u1",
                "printers": "p1",
                "filenames": "a",
                "pdf_source": "generate",
                "min_pages": 1,
                "max_pages": 1
            }
        }
    })
}
