//! HTTP client wrapper for the storefront's proxy routes.
//!
//! `ApiClient` resolves URLs against a configured base and attaches
//! `Authorization: Bearer <token>` whenever the persisted auth snapshot holds
//! an access token. Building the request is pure and testable; sending it is
//! only possible in the browser build (`csr`) where `gloo-net` is available.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `String`s. Request-construction failures are handed
//! to the caller as they are; the client never swallows them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::Value;

use super::types::{ProductSearchResponse, RegisterRequest, ResetPasswordRequest, VerifyEmailRequest};
use crate::state::auth::stored_access_token;
use crate::util::storage::Storage;

/// Base URL used when `DENTMART_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Base URL baked in at build time, falling back to the local proxy.
pub fn configured_base_url() -> &'static str {
    option_env!("DENTMART_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A fully resolved request, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and JSON body of a completed call. Non-JSON bodies read as `Null`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// Request factory bound to a base URL and the storage holding the session.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    base_url: String,
    storage: S,
}

impl<S: Storage> ApiClient<S> {
    pub fn new(base_url: &str, storage: S) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), storage }
    }

    /// Client using the build-time base URL.
    pub fn from_env(storage: S) -> Self {
        Self::new(configured_base_url(), storage)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` and attach the stored bearer token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty path or a stored token that cannot be
    /// carried in a header.
    pub fn request(&self, method: HttpMethod, path: &str) -> Result<ApiRequest, String> {
        let url = resolve_url(&self.base_url, path)?;
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(token) = stored_access_token(&self.storage) {
            headers.push(("Authorization".to_owned(), bearer_header(&token)?));
        }
        Ok(ApiRequest { method, url, headers })
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message, or a status summary, on failure.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<Value, String> {
        let resp = self.send_json(HttpMethod::Post, "/api/auth/register", Some(payload)).await?;
        expect_success(resp, "registration")
    }

    /// `POST /api/auth/verify-email`.
    ///
    /// # Errors
    ///
    /// Returns the backend's message, or a status summary, on failure.
    pub async fn verify_email(&self, payload: &VerifyEmailRequest) -> Result<Value, String> {
        let resp = self.send_json(HttpMethod::Post, "/api/auth/verify-email", Some(payload)).await?;
        expect_success(resp, "email verification")
    }

    /// `POST /api/mail/reset-password`. The proxy answers success regardless
    /// of whether the address exists.
    ///
    /// # Errors
    ///
    /// Returns an error only when the proxy itself is unreachable.
    pub async fn reset_password(&self, payload: &ResetPasswordRequest) -> Result<(), String> {
        let resp = self.send_json(HttpMethod::Post, "/api/mail/reset-password", Some(payload)).await?;
        expect_success(resp, "password reset").map(|_| ())
    }

    /// `GET /api/barcode/products/search?title=...`.
    ///
    /// # Errors
    ///
    /// Returns an error when the call fails or the body has the wrong shape.
    pub async fn search_products(&self, title: &str) -> Result<ProductSearchResponse, String> {
        let path = search_path(title);
        let resp = self.send_json::<()>(HttpMethod::Get, &path, None).await?;
        let body = expect_success(resp, "product search")?;
        serde_json::from_value(body).map_err(|e| e.to_string())
    }

    async fn send_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&T>,
    ) -> Result<ApiResponse, String> {
        let request = self.request(method, path)?;
        let body = body
            .map(|b| serde_json::to_value(b).map_err(|e| e.to_string()))
            .transpose()?;
        request.send(body.as_ref()).await
    }
}

impl ApiRequest {
    /// Issue the request from the browser.
    ///
    /// # Errors
    ///
    /// Returns an error string if the request cannot be built or sent, or
    /// when called outside the browser.
    pub async fn send(self, body: Option<&Value>) -> Result<ApiResponse, String> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let mut builder = match self.method {
                HttpMethod::Get => Request::get(&self.url),
                HttpMethod::Post => Request::post(&self.url),
                HttpMethod::Put => Request::put(&self.url),
                HttpMethod::Patch => Request::patch(&self.url),
                HttpMethod::Delete => Request::delete(&self.url),
            };
            for (name, value) in &self.headers {
                builder = builder.header(name, value);
            }
            let request = match body {
                Some(body) => builder.json(body).map_err(|e| e.to_string())?,
                None => builder.build().map_err(|e| e.to_string())?,
            };
            let resp = request.send().await.map_err(|e| e.to_string())?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| e.to_string())?;
            let body = serde_json::from_str(&text).unwrap_or(Value::Null);
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self, body);
            Err("not available on server".to_owned())
        }
    }
}

fn resolve_url(base_url: &str, path: &str) -> Result<String, String> {
    if path.is_empty() {
        return Err("request path must not be empty".to_owned());
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Ok(path.to_owned());
    }
    let path = path.trim_start_matches('/');
    Ok(format!("{base_url}/{path}"))
}

fn bearer_header(token: &str) -> Result<String, String> {
    if token.chars().any(char::is_control) {
        return Err("stored access token is not a valid header value".to_owned());
    }
    Ok(format!("Bearer {token}"))
}

fn search_path(title: &str) -> String {
    format!("/api/barcode/products/search?title={}", urlencoding::encode(title))
}

fn expect_success(resp: ApiResponse, action: &str) -> Result<Value, String> {
    if (200..300).contains(&resp.status) {
        return Ok(resp.body);
    }
    match resp.body.get("message").and_then(Value::as_str) {
        Some(message) => Err(message.to_owned()),
        None => Err(format!("{action} failed: {}", resp.status)),
    }
}
