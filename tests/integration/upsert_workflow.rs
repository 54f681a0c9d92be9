//! Upsert → read workflows.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use serial_test::serial;

use super::{call, get, post, test_app};

#[tokio::test]
#[serial]
async fn test_post_then_keyed_get_returns_steps() {
    let (router, _storage, _dir) = test_app().await;

    let (status, body) = call(
        &router,
        post(r#"{"phone_number":"5551234567","steps":42}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Record updated successfully",
            "phone_number": "5551234567",
            "steps": 42
        })
    );

    let (status, body) = call(&router, get("/api/live-steps?phone_number=5551234567")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "42");
}

#[tokio::test]
#[serial]
async fn test_repeat_post_overwrites_and_reorders() {
    let (router, _storage, _dir) = test_app().await;

    call(&router, post(r#"{"phone_number":"A","steps":1}"#)).await;
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    call(&router, post(r#"{"phone_number":"B","steps":2}"#)).await;
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
    call(&router, post(r#"{"phone_number":"A","steps":3}"#)).await;

    let (status, body) = call(&router, get("/api/live-steps")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["data"][0]["phone_number"], json!("A"));
    assert_eq!(body["data"][0]["steps"], json!(3));
    assert_eq!(body["data"][1]["phone_number"], json!("B"));
    assert!(body["data"][0]["timestamp"].is_string());
}

#[tokio::test]
#[serial]
async fn test_fixed_alias_matches_filtered_read() {
    let (router, _storage, _dir) = test_app().await;
    call(&router, post(r#"{"phone_number":"1111111111","steps":1000}"#)).await;

    let (_, alias) = call(&router, get("/api/live-steps/1111111111")).await;
    let (_, filtered) = call(&router, get("/api/live-steps?phone_number=1111111111")).await;
    assert_eq!(alias, "1000");
    assert_eq!(alias, filtered);
}

#[tokio::test]
#[serial]
async fn test_health_probe() {
    let (router, _storage, _dir) = test_app().await;
    let (status, body) = call(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], json!("OK"));
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}
