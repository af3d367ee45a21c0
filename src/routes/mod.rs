//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storefront talks to this server instead of the backend directly. Each
//! named route forwards to one fixed backend endpoint; everything under
//! `/backend-api` is rewritten onto the backend's `/api` tree verbatim.

pub mod auth;
pub mod barcode;
pub mod mail;
pub mod rewrite;

#[cfg(test)]
pub(crate) mod test_helpers;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full proxy router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/verify-email", post(auth::verify_email))
        .route("/api/mail/reset-password", post(mail::reset_password))
        .route("/api/barcode/products/search", get(barcode::search_products))
        .route("/healthz", get(healthz));
    for route in rewrite::ROUTES {
        router = router.route(route, any(rewrite::forward));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
