//! Writes the demo fixture records into the configured database.

use live_steps::config::{Config, DEFAULT_LOG_LEVEL};
use live_steps::seed::{seed, DEMO_RECORDS};
use live_steps::storage::SqliteStorage;

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

    let storage = match SqliteStorage::new(&config.database_path).await {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!("Storage error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Inserting demo data into {}...", config.database_path);
    let report = seed(&storage, &DEMO_RECORDS).await;
    storage.close().await;

    tracing::info!(
        "Demo data insertion complete: {} written, {} failed",
        report.written,
        report.failed
    );
    if report.failed > 0 {
        std::process::exit(1);
    }
}
