//! Axum server setup
//!
//! Startup order: schema setup (failure logged, not fatal), bind, serve until
//! Ctrl+C/SIGTERM, close the pool.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::db::{ensure_schema, Database};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Build the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::pages::router())
        .merge(routes::books::router())
        .fallback(routes::pages::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let db = Database::connect(&DbConfig::new(database_url)).await?;
/// run_server(db, ServerConfig::default()).await?;
/// ```
pub async fn run_server(db: Database, config: ServerConfig) -> Result<(), ServerError> {
    run_server_with_shutdown(db, config, shutdown_signal()).await
}

/// Run the HTTP server until `shutdown` resolves.
pub async fn run_server_with_shutdown<F>(
    db: Database,
    config: ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    // Schema errors are logged and startup continues
    if let Err(e) = ensure_schema(&db).await {
        tracing::error!("Error setting up the database: {}", e);
    }

    let app = build_router(AppState { db: db.clone() });

    let (listener, local_addr) = match bind(config.bind_addr).await {
        Ok(bound) => bound,
        Err(e) => {
            db.close().await;
            return Err(e.into());
        }
    };
    tracing::info!("Server started (http://{}/)", local_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    db.close().await;
    served?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn bind(addr: SocketAddr) -> std::io::Result<(TcpListener, SocketAddr)> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    Ok((listener, local_addr))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
