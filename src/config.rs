//! Proxy configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:5000";
pub const DEFAULT_USER_AGENT: &str = "dentmart-storefront/1.0";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    /// Whole-request deadline. `None` waits on the backend indefinitely.
    pub request: Option<Duration>,
    pub connect: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub port: u16,
    /// Remote backend origin without a trailing slash.
    pub backend_origin: String,
    pub user_agent: String,
    pub timeouts: ProxyTimeouts,
}

impl ProxyConfig {
    /// Build typed proxy config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_ORIGIN`: default `http://localhost:5000`
    /// - `PROXY_USER_AGENT`: static `User-Agent` sent upstream
    /// - `PROXY_REQUEST_TIMEOUT_SECS`: default 30, `0` disables the deadline
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let backend_origin = std::env::var("BACKEND_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_BACKEND_ORIGIN.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let user_agent = std::env::var("PROXY_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_owned());

        let request_secs = env_parse("PROXY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let connect_secs = env_parse("PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let timeouts = ProxyTimeouts {
            request: (request_secs > 0).then(|| Duration::from_secs(request_secs)),
            connect: Duration::from_secs(connect_secs),
        };

        Ok(Self { port, backend_origin, user_agent, timeouts })
    }

    /// Config pointing at `origin` with default agent and timeouts.
    #[cfg(test)]
    #[must_use]
    pub fn with_origin(origin: &str) -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_origin: origin.trim_end_matches('/').to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeouts: ProxyTimeouts {
                request: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
                connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            },
        }
    }

    /// Absolute backend URL for a path beginning with `/`.
    #[must_use]
    pub fn backend_url(&self, path: &str) -> String {
        format!("{}{path}", self.backend_origin)
    }

    /// Build the shared outbound HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .connect_timeout(self.timeouts.connect);
        if let Some(request) = self.timeouts.request {
            builder = builder.timeout(request);
        }
        builder.build()
    }
}

fn env_parse<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
