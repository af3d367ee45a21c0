use axum::body::Body;
use axum::http::Request;

use super::test_helpers::{call, proxy_app, unreachable_origin};
use super::*;

#[tokio::test]
async fn healthz_is_ok_without_backend() {
    let app = proxy_app(&unreachable_origin().await);
    let (status, body) = call(app, Request::get("/healthz").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = proxy_app(&unreachable_origin().await);
    let resp = tower::ServiceExt::oneshot(app, Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
