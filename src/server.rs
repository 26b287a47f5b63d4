//! HTTP server initialization and runtime setup.
//!
//! Opens the store, wires the services into [`AppState`] and runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::{LinkService, ShortLinkStore};
use crate::config::Config;
use crate::infrastructure::store;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the link service for a configuration.
///
/// Shared by the server and the admin CLI.
///
/// # Errors
///
/// Returns an error if the store backend cannot be opened.
pub async fn build_link_service(config: &Config) -> Result<LinkService> {
    let backend = store::connect(config).await?;
    let store = ShortLinkStore::new(backend, config.store_timeout(), config.reserve_mode);

    Ok(LinkService::new(store, config.public_hosts()))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store backend cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_service = build_link_service(&config).await?;
    let state = AppState::new(Arc::new(link_service));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
