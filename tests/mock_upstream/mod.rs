//! Shared test helpers
//!
//! - `RecordingUpstream`: in-process `UpstreamApi` double that records every
//!   request and replays queued results
//! - config and router builders used by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use retell_gateway::{
    ServerConfig, UpstreamApi, UpstreamError, UpstreamRequest, UpstreamResponse, handlers,
    routes, state::AppState,
};

pub const TEST_API_KEY: &str = "key_test_123";

/// Helper function to create a minimal test configuration
pub fn create_test_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
        retell_api_key: TEST_API_KEY.to_string(),
        retell_base_url: base_url.to_string(),
        cors_allowed_origins: None,
        rate_limit_requests_per_second: 100000, // Disable for tests
        rate_limit_burst_size: 100,
    }
}

/// Find an available port for testing
pub fn find_available_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// Health route + API routes, the same composition the binary serves
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", axum::routing::get(handlers::api::health_check))
        .merge(routes::api::create_api_router())
        .with_state(state)
}

/// Records requests; answers with queued results, then with `200 {"ok": true}`.
#[derive(Default)]
pub struct RecordingUpstream {
    requests: Mutex<Vec<UpstreamRequest>>,
    responses: Mutex<VecDeque<Result<UpstreamResponse, UpstreamError>>>,
}

impl RecordingUpstream {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, result: Result<UpstreamResponse, UpstreamError>) {
        self.responses.lock().unwrap().push_back(result);
    }

    pub fn respond_json(&self, status: StatusCode, body: Value) {
        self.respond_raw(status, &body.to_string());
    }

    /// Queue a body exactly as given, byte for byte
    pub fn respond_raw(&self, status: StatusCode, body: &str) {
        self.respond_with(Ok(UpstreamResponse {
            status,
            body: Some(Bytes::from(body.to_string())),
        }));
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamApi for RecordingUpstream {
    async fn execute(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(UpstreamResponse {
                    status: StatusCode::OK,
                    body: Some(Bytes::from(json!({"ok": true}).to_string())),
                })
            })
    }
}

/// App wired to a fresh `RecordingUpstream`
pub fn recording_app() -> (Router, Arc<RecordingUpstream>) {
    let upstream = RecordingUpstream::new();
    let state = AppState::with_upstream(
        create_test_config("http://127.0.0.1:9"),
        upstream.clone() as Arc<dyn UpstreamApi>,
    );
    (build_app(state), upstream)
}

/// Send one request through the router and collect the status and body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Bytes) {
    send_with_content_type(app, method, uri, body, "application/json").await
}

/// Same as `send`, with an explicit `content-type` for the body
pub async fn send_with_content_type(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
    content_type: &str,
) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(body) => {
            builder = builder.header("content-type", content_type);
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

pub fn json_body(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).expect("response body should be JSON")
}
