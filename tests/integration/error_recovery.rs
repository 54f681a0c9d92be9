//! Rejected input and storage failures.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use serial_test::serial;

use super::{call, get, post, test_app};

fn error_of(body: &str) -> Value {
    serde_json::from_str::<Value>(body).unwrap()["error"].clone()
}

#[tokio::test]
#[serial]
async fn test_negative_steps_rejected_and_state_unchanged() {
    let (router, _storage, _dir) = test_app().await;
    call(&router, post(r#"{"phone_number":"5551234567","steps":7}"#)).await;

    let (status, body) = call(
        &router,
        post(r#"{"phone_number":"5551234567","steps":-1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), json!("steps must be a non-negative integer"));

    let (_, body) = call(&router, get("/api/live-steps?phone_number=5551234567")).await;
    assert_eq!(body, "7");
}

#[tokio::test]
#[serial]
async fn test_missing_phone_rejected() {
    let (router, _storage, _dir) = test_app().await;

    let (status, body) = call(&router, post(r#"{"steps":10}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_of(&body),
        json!("phone_number and steps are required fields")
    );

    let (_, body) = call(&router, get("/api/live-steps")).await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["count"], json!(0));
}

#[tokio::test]
#[serial]
async fn test_non_integer_steps_rejected() {
    let (router, _storage, _dir) = test_app().await;
    for payload in [
        r#"{"phone_number":"5551234567","steps":"42"}"#,
        r#"{"phone_number":"5551234567","steps":1.5}"#,
        r#"{"phone_number":"5551234567","steps":true}"#,
    ] {
        let (status, _) = call(&router, post(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
    }
}

#[tokio::test]
#[serial]
async fn test_closed_store_yields_500() {
    let (router, storage, _dir) = test_app().await;
    storage.close().await;

    let (status, body) = call(
        &router,
        post(r#"{"phone_number":"5551234567","steps":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(&body), json!("Database error"));

    let (status, _) = call(&router, get("/api/live-steps?phone_number=5551234567")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = call(&router, get("/api/live-steps")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
