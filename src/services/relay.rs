//! Backend relay: one outbound call, then per-route response normalization.
//!
//! DESIGN
//! ======
//! Every proxy route performs exactly one request against the backend and
//! hands the outcome to `normalize`, which applies the route's `RelayPolicy`.
//! The policy is the only thing that differs between routes:
//!
//! - `Relay`: JSON bodies are relayed with the backend status; non-JSON
//!   failures become `{message, status}`; non-JSON successes become the
//!   policy's fallback body with 200.
//! - `AssumeJson`: the body is parsed as JSON whatever the content type.
//! - `AlwaysSucceed`: the caller always sees 200 `{success: true}`. Backend
//!   fields are merged in when they parse; every failure is swallowed so the
//!   caller cannot tell whether the backend accepted the request.
//!
//! No retries. Timeouts come from the shared client built in `ProxyConfig`.

use axum::body::Bytes;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::{Map, Value, json};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Body returned by a `Relay` route when the backend succeeds without JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessFallback {
    /// `{"success": true}`
    Acknowledge,
    /// `{"products": [], "barcodeProducts": []}`
    EmptySearch,
}

impl SuccessFallback {
    #[must_use]
    pub fn body(self) -> Value {
        match self {
            Self::Acknowledge => json!({ "success": true }),
            Self::EmptySearch => json!({ "products": [], "barcodeProducts": [] }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayPolicy {
    Relay { label: &'static str, fallback: SuccessFallback },
    AssumeJson,
    AlwaysSucceed,
}

/// Request description for a single backend call.
#[derive(Debug, Clone)]
pub struct Outbound {
    pub method: Method,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub authorization: Option<HeaderValue>,
    pub body: Option<Bytes>,
}

impl Outbound {
    #[must_use]
    pub fn post(path: &'static str, body: Bytes) -> Self {
        Self { method: Method::POST, path, query: Vec::new(), authorization: None, body: Some(body) }
    }

    #[must_use]
    pub fn get(path: &'static str) -> Self {
        Self { method: Method::GET, path, query: Vec::new(), authorization: None, body: None }
    }

    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    #[must_use]
    pub fn authorization(mut self, value: HeaderValue) -> Self {
        self.authorization = Some(value);
        self
    }
}

/// Buffered backend response.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    pub status: StatusCode,
    pub is_json: bool,
    pub body: Bytes,
}

/// Normalized caller-facing response.
#[derive(Debug, Clone, PartialEq)]
pub struct Relayed {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// True when the `Content-Type` header names `application/json`.
#[must_use]
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.to_ascii_lowercase().contains("application/json"))
}

/// Perform the backend call and buffer its response.
///
/// # Errors
///
/// Returns `RelayError::Transport` on connect, timeout, or body read failure.
pub async fn send(state: &AppState, outbound: Outbound) -> Result<RemoteResponse, RelayError> {
    let url = state.config.backend_url(outbound.path);
    let mut request = state
        .http
        .request(outbound.method, &url)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json");
    if !outbound.query.is_empty() {
        request = request.query(&outbound.query);
    }
    if let Some(authorization) = outbound.authorization {
        request = request.header(AUTHORIZATION, authorization);
    }
    if let Some(body) = outbound.body {
        request = request.body(body);
    }

    let resp = request.send().await?;
    let status = resp.status();
    let is_json = is_json_content_type(resp.headers());
    let body = resp.bytes().await?;
    tracing::debug!(%url, %status, is_json, "backend responded");
    Ok(RemoteResponse { status, is_json, body })
}

/// Apply `policy` to the outcome of a backend call.
///
/// # Errors
///
/// `Relay` and `AssumeJson` surface transport errors and unparseable JSON.
/// `AlwaysSucceed` never errors.
pub fn normalize(policy: RelayPolicy, outcome: Result<RemoteResponse, RelayError>) -> Result<Relayed, RelayError> {
    match policy {
        RelayPolicy::Relay { label, fallback } => {
            let remote = outcome?;
            if remote.is_json {
                let body = serde_json::from_slice(&remote.body)?;
                return Ok(Relayed { status: remote.status, body });
            }
            if remote.status.is_success() {
                return Ok(Relayed { status: StatusCode::OK, body: fallback.body() });
            }
            let code = remote.status.as_u16();
            Ok(Relayed {
                status: remote.status,
                body: json!({
                    "message": format!("{label} failed with status {code}"),
                    "status": code,
                }),
            })
        }
        RelayPolicy::AssumeJson => {
            let remote = outcome?;
            let body = serde_json::from_slice(&remote.body)?;
            Ok(Relayed { status: remote.status, body })
        }
        RelayPolicy::AlwaysSucceed => {
            let mut fields = Map::new();
            match outcome {
                Ok(remote) => match serde_json::from_slice::<Value>(&remote.body) {
                    Ok(Value::Object(remote_fields)) => fields = remote_fields,
                    Ok(_) => tracing::debug!(status = %remote.status, "backend body is not an object; ignored"),
                    Err(e) => tracing::debug!(status = %remote.status, error = %e, "backend body unparseable; ignored"),
                },
                Err(e) => tracing::debug!(error = %e, "backend call failed; reporting success"),
            }
            fields.insert("success".to_owned(), Value::Bool(true));
            Ok(Relayed { status: StatusCode::OK, body: Value::Object(fields) })
        }
    }
}

/// Send `outbound` and answer the caller according to `policy`.
pub async fn forward(state: &AppState, outbound: Outbound, policy: RelayPolicy) -> Response {
    let path = outbound.path;
    let outcome = send(state, outbound).await;
    match normalize(policy, outcome) {
        Ok(relayed) => {
            if !relayed.status.is_success() {
                tracing::warn!(path, status = %relayed.status, "backend rejected request");
            }
            relayed.into_response()
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "relay failed");
            e.into_response()
        }
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
