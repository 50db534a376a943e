#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tryout_api::config::ServerConfig;
use tryout_api::router::build_app_router;
use tryout_api::state::AppState;
use tryout_db::{EntityStore, MemoryStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        ..ServerConfig::default()
    }
}

/// Build the full application router on top of an in-memory store.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_test_app_with(store, test_config())
}

pub fn build_test_app_with(store: Arc<MemoryStore>, config: ServerConfig) -> Router {
    let shared: Arc<dyn EntityStore> = store;
    let state = AppState::new(shared, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// POST a raw string body with a JSON content type (for malformed payloads).
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn tryout_body(title: &str, category: &str, duration: i32) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": format!("{title} description"),
        "category": category,
        "duration": duration,
    })
}

/// Create a tryout over HTTP and return its hex id.
pub async fn create_tryout(store: &Arc<MemoryStore>, category: &str, duration: i32) -> String {
    let app = build_test_app(Arc::clone(store));
    let response = post_json(
        app,
        "/api/v1/tryouts",
        tryout_body("Quiz", category, duration),
    )
    .await;
    body_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a question over HTTP and return its hex id.
pub async fn create_question(store: &Arc<MemoryStore>, tryout_id: &str, text: &str) -> String {
    let app = build_test_app(Arc::clone(store));
    let response = post_json(
        app,
        &format!("/api/v1/tryouts/{tryout_id}/questions"),
        serde_json::json!({ "text": text, "isTrue": true }),
    )
    .await;
    body_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Flip the submission lock directly on the store. There is no HTTP route
/// for it.
pub async fn lock_tryout(store: &Arc<MemoryStore>, tryout_id: &str) {
    let id = tryout_id.parse().unwrap();
    store
        .set_submission_lock(id, true)
        .await
        .unwrap()
        .expect("tryout exists");
}
