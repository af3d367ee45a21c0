//! Mail routes.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use crate::services::relay::{self, Outbound, RelayPolicy};
use crate::state::AppState;

const RESET_PASSWORD_PATH: &str = "/api/mail/reset-password";

/// `POST /api/mail/reset-password` — request a password reset email.
///
/// Always answers 200 with `success: true`, whatever the backend said. Fields
/// of a JSON object body are merged in even on backend failure, so the
/// backend must not put account-specific detail in its error bodies here.
pub async fn reset_password(State(state): State<AppState>, body: Bytes) -> Response {
    relay::forward(&state, Outbound::post(RESET_PASSWORD_PATH, body), RelayPolicy::AlwaysSucceed).await
}

#[cfg(test)]
#[path = "mail_test.rs"]
mod tests;
