//! Wire DTOs shared with the proxy routes and the backend.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON; these types mirror it field for field
//! so the auth snapshot and API payloads round-trip without adapters.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A marketplace account as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub email_confirmed: bool,
    pub phone_number_confirmed: bool,
    pub two_factor_enabled: bool,
    /// End of an account lockout (ISO-8601), if one is active.
    #[serde(default)]
    pub lockout_end: Option<String>,
    /// Account creation time (ISO-8601).
    pub created_at: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Body for `POST /api/auth/verify-email`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub email: String,
    pub token: String,
}

/// Body for `POST /api/mail/reset-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

/// Result of `GET /api/barcode/products/search`.
///
/// Product records are passed through as raw JSON; the storefront only lists
/// them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchResponse {
    #[serde(default)]
    pub products: Vec<serde_json::Value>,
    #[serde(default)]
    pub barcode_products: Vec<serde_json::Value>,
}
