use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::post;
use serde_json::json;

use crate::routes::test_helpers::{call, post_json, proxy_app, spawn_backend, unreachable_origin};

const URI: &str = "/api/mail/reset-password";

#[tokio::test]
async fn reset_password_success_merges_backend_fields() {
    let backend = Router::new().route(URI, post(|| async { Json(json!({ "message": "sent" })) }));
    let origin = spawn_backend(backend).await;
    let (status, body) = call(proxy_app(&origin), post_json(URI, r#"{"email":"a@b.c"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "sent", "success": true }));
}

#[tokio::test]
async fn reset_password_backend_500_still_succeeds() {
    let backend = Router::new().route(
        URI,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down").into_response() }),
    );
    let origin = spawn_backend(backend).await;
    let (status, body) = call(proxy_app(&origin), post_json(URI, r#"{"email":"a@b.c"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn reset_password_unknown_email_looks_identical() {
    let backend = Router::new().route(
        URI,
        post(|| async { (StatusCode::NOT_FOUND, Json(json!({ "success": false }))).into_response() }),
    );
    let origin = spawn_backend(backend).await;
    let (status, body) = call(proxy_app(&origin), post_json(URI, r#"{"email":"ghost@b.c"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn reset_password_network_failure_still_succeeds() {
    let origin = unreachable_origin().await;
    let (status, body) = call(proxy_app(&origin), post_json(URI, "{}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn reset_password_backend_404_message_is_merged_with_success() {
    let backend = Router::new().route(
        URI,
        post(|| async { (StatusCode::NOT_FOUND, Json(json!({ "message": "no such account" }))).into_response() }),
    );
    let origin = spawn_backend(backend).await;
    let (status, body) = call(proxy_app(&origin), post_json(URI, r#"{"email":"ghost@b.c"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "no such account", "success": true }));
}
