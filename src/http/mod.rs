//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::errors::Result;
pub use state::AppState;

/// Build the application router with all routes
pub fn build_router(db: DatabaseConnection) -> Router {
    Router::new()
        .merge(routes::root::router())
        .merge(routes::items::router())
        .merge(routes::wallets::router())
        .merge(routes::merchants::router())
        .merge(routes::transactions::router())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState::new(db)))
}

/// Serves the API on `addr` until Ctrl+C or SIGTERM, then closes the database.
pub async fn run_server(db: DatabaseConnection, addr: SocketAddr) -> Result<()> {
    let app = build_router(db.clone());

    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, starting shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, starting shutdown");
        }
    }
}
