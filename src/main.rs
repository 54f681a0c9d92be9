//! Live Steps HTTP server binary entry point.
//!
//! Logs go to stderr. Startup faults (configuration, storage, bind) exit
//! with status 1 rather than serving with a broken store.

use live_steps::config::{Config, DEFAULT_LOG_LEVEL};
use live_steps::server::HttpServer;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            live_steps::logging::init(DEFAULT_LOG_LEVEL);
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    live_steps::logging::init(&config.log_level);
    tracing::info!("live-steps starting...");
    tracing::info!(
        "Configuration loaded: database={}, addr={}",
        config.database_path,
        config.socket_addr()
    );

    let server = HttpServer::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("live-steps shutdown complete");
}
