mod agent;
mod config;
mod errors;
mod models;
mod routes;
mod service;

use std::sync::Arc;

use tracing::{info, warn};

use crate::agent::GatewayClient;
use crate::config::{RelayConfig, API_KEY_VAR};
use crate::service::chat_service::ChatService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_chat_relay=debug,tower_http=debug".into()),
        )
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let config = Arc::new(RelayConfig::from_env());
    if !config.has_api_key() {
        warn!("{API_KEY_VAR} is not set; chat requests will fail until it is configured");
    }
    info!(
        gateway = %config.gateway_url,
        timeout_secs = config.request_timeout.as_secs(),
        "AI gateway configured"
    );

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let gateway = GatewayClient::new(&config)?;
    let chat_service = ChatService::new(config.clone(), gateway);
    let app = routes::router(chat_service);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
