use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers hold `env_guard()` so env mutation stays serialized.
unsafe fn clear_proxy_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_ORIGIN");
        std::env::remove_var("PROXY_USER_AGENT");
        std::env::remove_var("PROXY_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("PROXY_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = env_guard();
    unsafe { clear_proxy_env() };

    let cfg = ProxyConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_origin, DEFAULT_BACKEND_ORIGIN);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts {
            request: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_proxy_env();
        std::env::set_var("PORT", "8088");
        std::env::set_var("BACKEND_ORIGIN", "https://backend.example.test//");
        std::env::set_var("PROXY_USER_AGENT", "storefront-test/2");
        std::env::set_var("PROXY_REQUEST_TIMEOUT_SECS", "0");
        std::env::set_var("PROXY_CONNECT_TIMEOUT_SECS", "3");
    }

    let cfg = ProxyConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8088);
    assert_eq!(cfg.backend_origin, "https://backend.example.test");
    assert_eq!(cfg.user_agent, "storefront-test/2");
    assert_eq!(cfg.timeouts.request, None);
    assert_eq!(cfg.timeouts.connect, Duration::from_secs(3));

    unsafe { clear_proxy_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = env_guard();
    unsafe {
        clear_proxy_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = ProxyConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("PORT"));

    unsafe { clear_proxy_env() };
}

#[test]
fn backend_url_joins_origin_and_path() {
    let cfg = ProxyConfig::with_origin("http://127.0.0.1:9/");
    assert_eq!(cfg.backend_url("/api/users/register"), "http://127.0.0.1:9/api/users/register");
}
