#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use configs::{AppConfig, StorageBackend};
use tower::ServiceExt;

/// Router over a private in-memory SQLite store.
pub async fn sql_app() -> Router {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    let state = server::build_state(&cfg).await.expect("sql state");
    server::build_app(state)
}

/// Router over a JSON document store in a fresh temp file.
pub async fn json_app() -> (Router, PathBuf) {
    let path = std::env::temp_dir().join(format!("todo_api_{}.json", uuid::Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::JsonFile;
    cfg.storage.json_path = path.to_string_lossy().into_owned();
    let state = server::build_state(&cfg).await.expect("json state");
    (server::build_app(state), path)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn raw_request(method: &str, uri: &str, content_type: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).expect("request")
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.expect("infallible router")
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub async fn read_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}
