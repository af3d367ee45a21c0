//! Stub backend and request helpers shared by route tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt as _;

use crate::config::ProxyConfig;
use crate::state::AppState;

/// Serve `backend` on an ephemeral local port and return its origin.
pub(crate) async fn spawn_backend(backend: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub backend should bind");
    let addr = listener.local_addr().expect("stub backend should have an address");
    tokio::spawn(async move {
        axum::serve(listener, backend).await.expect("stub backend should serve");
    });
    format!("http://{addr}")
}

/// Origin on which nothing is listening.
pub(crate) async fn unreachable_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("placeholder listener should bind");
    let addr = listener.local_addr().expect("placeholder listener should have an address");
    drop(listener);
    format!("http://{addr}")
}

/// Proxy router wired to `origin`.
pub(crate) fn proxy_app(origin: &str) -> Router {
    let state = AppState::new(ProxyConfig::with_origin(origin)).expect("http client should build");
    super::app(state)
}

/// Drive `request` through `app`, returning status and parsed JSON body.
/// An empty body parses as `Value::Null`.
pub(crate) async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(request).await.expect("router is infallible");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should buffer");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("proxy responses are JSON")
    };
    (status, body)
}

pub(crate) fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .expect("request should build")
}
