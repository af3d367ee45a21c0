//! Prefix rewrite: `/backend-api/{path}` is served by the backend's `/api/{path}`.
//!
//! Unlike the named routes this forwarder does not reshape anything. Method,
//! query, body and end-to-end headers go through untouched and the backend's
//! status, headers and body come back the same way.
//!
//! The path tail is taken from the raw request URI, never from a decoded
//! `Path` capture, so `%2F`, `%3F` and `%23` keep their escaping upstream.

use axum::body::{Body, Bytes};
use axum::extract::{OriginalUri, State};
use axum::http::header::{self, HeaderName};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::state::AppState;

pub const PREFIX: &str = "/backend-api";

/// Routes served by [`forward`]. The wildcard never matches an empty tail,
/// so the bare prefix and the prefix with a trailing slash are listed too.
pub const ROUTES: [&str; 3] = ["/backend-api", "/backend-api/", "/backend-api/{*path}"];

static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::CONTENT_LENGTH,
];

/// Still-encoded path after [`PREFIX`], without its leading slash.
#[must_use]
pub fn encoded_tail(request_path: &str) -> &str {
    let tail = request_path.strip_prefix(PREFIX).unwrap_or(request_path);
    tail.strip_prefix('/').unwrap_or(tail)
}

/// Backend URL for a rewritten request. `path` must already be percent-encoded.
#[must_use]
pub fn rewrite_target(origin: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query {
        Some(q) if !q.is_empty() => format!("{origin}/api/{path}?{q}"),
        _ => format!("{origin}/api/{path}"),
    }
}

/// Copy `headers` minus `Host`, `keep-alive` and hop-by-hop headers.
#[must_use]
pub fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    out.remove(header::HOST);
    out.remove("keep-alive");
    for name in &HOP_BY_HOP {
        out.remove(name);
    }
    out
}

/// `ANY /backend-api/{*path}` — forward verbatim to `/api/{path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = rewrite_target(&state.config.backend_origin, encoded_tail(uri.path()), uri.query());
    let request = state
        .http
        .request(method, &url)
        .headers(end_to_end_headers(&headers))
        .body(body);

    let resp = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%url, error = %e, "rewrite forward failed");
            return (StatusCode::BAD_GATEWAY, Json(json!({ "message": format!("backend request failed: {e}") })))
                .into_response();
        }
    };

    let status = resp.status();
    let resp_headers = end_to_end_headers(resp.headers());
    match resp.bytes().await {
        Ok(bytes) => {
            let mut out = Response::new(Body::from(bytes));
            *out.status_mut() = status;
            *out.headers_mut() = resp_headers;
            out
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "rewrite body read failed");
            (StatusCode::BAD_GATEWAY, Json(json!({ "message": format!("backend body read failed: {e}") })))
                .into_response()
        }
    }
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod tests;
