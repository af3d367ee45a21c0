//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Handlers only read it: the outbound HTTP client and the proxy config.
//! Nothing mutable is shared between requests.

use std::sync::Arc;

use crate::config::ProxyConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `reqwest::Client` is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ProxyConfig>,
}

impl AppState {
    /// Build state and its outbound client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ProxyConfig) -> Result<Self, reqwest::Error> {
        let http = config.http_client()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
