//! HTTP listener lifecycle.
//!
//! Opens storage, binds, serves until a shutdown signal, then closes the
//! storage pool.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use super::router::{build_router, FIXED_PHONE_PATH, HEALTH_PATH, STEPS_PATH};
use super::types::AppState;
use crate::config::Config;
use crate::error::{AppError, ServerError};
use crate::storage::SqliteStorage;

/// Live-steps HTTP server.
#[derive(Debug)]
pub struct HttpServer {
    config: Config,
}

impl HttpServer {
    /// Creates a new server with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Open storage, bind the configured address, and serve until SIGINT/SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be opened, the address cannot be
    /// bound, or the server loop fails.
    pub async fn run(&self) -> Result<(), AppError> {
        let storage = SqliteStorage::new(&self.config.database_path).await?;

        let addr = self.config.socket_addr();
        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                storage.close().await;
                return Err(ServerError::Bind {
                    addr: addr.to_string(),
                    message: e.to_string(),
                }
                .into());
            }
        };

        self.serve(listener, storage, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests are drained before the storage pool is closed.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Io`] if the server loop fails. Storage is
    /// closed either way.
    pub async fn serve<F>(
        &self,
        listener: TcpListener,
        storage: SqliteStorage,
        shutdown: F,
    ) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = bound_addr(listener.local_addr(), &storage).await?;

        let state = AppState::new(Arc::new(storage.clone()), self.config.clone());
        let app = build_router(state);

        tracing::info!("Server running on http://{local}");
        tracing::info!("API endpoints:");
        tracing::info!("  GET  {STEPS_PATH} - Get all records (optional ?phone_number=filter)");
        tracing::info!("  GET  {FIXED_PHONE_PATH} - Get live steps for 1111111111 only");
        tracing::info!("  POST {STEPS_PATH} - Create or update a record");
        tracing::info!("  GET  {HEALTH_PATH} - Health check");

        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Io {
                message: e.to_string(),
            });

        storage.close().await;
        served?;
        Ok(())
    }
}

/// Unwrap the listener address, closing `storage` if it is unavailable.
async fn bound_addr(
    local: std::io::Result<SocketAddr>,
    storage: &SqliteStorage,
) -> Result<SocketAddr, ServerError> {
    match local {
        Ok(addr) => Ok(addr),
        Err(e) => {
            storage.close().await;
            Err(ServerError::Io {
                message: e.to_string(),
            })
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down server...");
}
