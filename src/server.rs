//! Process wiring: build the store, collaborators and router, then serve.

use anyhow::{Context, Result};
use axum::Router;
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::api::{self, AppState};
use crate::config::Config;
use crate::constants::LOG_SERVER_LISTENING;
use crate::integrations::Integrations;
use crate::logger::Logger;
use crate::storage::{DocumentStore, MemoryStore};

/// Router over a fresh in-memory store
pub fn build_app(config: &Config, logger: Logger) -> Result<Router> {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    let integrations = Integrations::from_config(&config.integrations).context("Failed to set up integrations")?;
    Ok(api::router(AppState::new(config, store, integrations, logger)))
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: Config, logger: Logger) -> Result<()> {
    let app = build_app(&config, logger)?;
    let address = config.bind_address()?;

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("{} on http://{}", LOG_SERVER_LISTENING, address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Dashboard API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // without a signal handler, keep serving
        std::future::pending::<()>().await;
    }
}
