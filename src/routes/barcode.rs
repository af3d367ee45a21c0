//! Barcode product search route.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::services::relay::{self, Outbound, RelayPolicy, SuccessFallback};
use crate::state::AppState;

const SEARCH_PATH: &str = "/api/barcode/products/search";

const SEARCH_POLICY: RelayPolicy = RelayPolicy::Relay { label: "Search", fallback: SuccessFallback::EmptySearch };

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    title: Option<String>,
}

/// `GET /api/barcode/products/search?title=...` — authenticated product search.
///
/// The caller's `Authorization` header is forwarded verbatim. It is checked
/// before the query string, and a query that fails to deserialize gets the
/// same JSON 400 as a missing title.
pub async fn search_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    let Some(authorization) = headers.get(AUTHORIZATION).cloned() else {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Authorization header is required" })))
            .into_response();
    };
    let params = query
        .map(|Query(params)| params)
        .inspect_err(|e| tracing::debug!(error = %e, "search query rejected"))
        .ok();
    let Some(title) = params.and_then(|p| p.title).filter(|t| !t.is_empty()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "Title query parameter is required" })))
            .into_response();
    };

    let outbound = Outbound::get(SEARCH_PATH)
        .query("title", title)
        .authorization(authorization);
    relay::forward(&state, outbound, SEARCH_POLICY).await
}

#[cfg(test)]
#[path = "barcode_test.rs"]
mod tests;
