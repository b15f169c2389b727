//! Fastener reference API server.
//!
//! # Usage
//!
//! ```sh
//! fastener-api --port 8000
//! FASTENER_DATA_DIR=/srv/fastener-data fastener-api
//! ```
//!
//! Datasets are loaded and validated before the listener is bound, so a bad
//! data directory fails at startup rather than on the first request.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fastener_api::{build_router, AppState, CorsConfig, ServerConfig};
use fastener_core::ReferenceStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let store = ReferenceStore::new(config.data_source());
    store.load_all().context("failed to load reference data")?;
    info!(source = ?store.source(), "reference data loaded");

    let state = AppState::new(store);
    let cors_config = Arc::new(CorsConfig::new(config.allowed_origins.clone()));
    let app = build_router(state, cors_config);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => error!("failed to install SIGTERM handler: {}", err),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received SIGINT, shutting down");
        }
        _ = terminate => {
            info!("received SIGTERM, shutting down");
        }
    }
}
