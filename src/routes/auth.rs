//! Account routes: registration and email verification.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use crate::services::relay::{self, Outbound, RelayPolicy, SuccessFallback};
use crate::state::AppState;

const REGISTER_PATH: &str = "/api/users/register";
const VERIFY_EMAIL_PATH: &str = "/api/mail/verify-email";

const REGISTER_POLICY: RelayPolicy =
    RelayPolicy::Relay { label: "Registration", fallback: SuccessFallback::Acknowledge };

/// `POST /api/auth/register` — forward the sign-up body to the backend.
pub async fn register(State(state): State<AppState>, body: Bytes) -> Response {
    relay::forward(&state, Outbound::post(REGISTER_PATH, body), REGISTER_POLICY).await
}

/// `POST /api/auth/verify-email` — forward a verification token.
///
/// The backend always answers this endpoint with JSON, so its body is relayed
/// without checking the content type.
pub async fn verify_email(State(state): State<AppState>, body: Bytes) -> Response {
    relay::forward(&state, Outbound::post(VERIFY_EMAIL_PATH, body), RelayPolicy::AssumeJson).await
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
