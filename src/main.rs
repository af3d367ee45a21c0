mod config;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ProxyConfig::from_env().expect("invalid proxy configuration");
    let port = config.port;
    tracing::info!(
        backend = %config.backend_origin,
        request_timeout_secs = config.timeouts.request.map(|d| d.as_secs()),
        "proxy configured"
    );

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dentmart listening");
    axum::serve(listener, app).await.expect("server failed");
}
