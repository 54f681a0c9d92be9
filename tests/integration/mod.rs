//! HTTP workflow tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod error_recovery;
mod upsert_workflow;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use live_steps::config::Config;
use live_steps::server::{build_router, AppState};
use live_steps::storage::SqliteStorage;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over a fresh file-backed store, plus the store and its directory.
pub async fn test_app() -> (Router, SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let storage = SqliteStorage::new(temp_dir.path().join("identifier.sqlite"))
        .await
        .expect("Failed to create storage");
    let router = build_router(AppState::new(Arc::new(storage.clone()), Config::default()));
    (router, storage, temp_dir)
}

/// Send one request, returning status and body text.
pub async fn call(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/live-steps")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
