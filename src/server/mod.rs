//! HTTP server implementation.
//!
//! This module provides:
//! - The `axum` route table with CORS and request tracing
//! - Handlers for listing, looking up, and upserting step records
//! - Listener lifecycle with graceful shutdown
//!
//! # Routes
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/api/live-steps` | `{success, data, count}` |
//! | GET | `/api/live-steps?phone_number=X` | plain-text step count |
//! | GET | `/api/live-steps/1111111111` | plain-text step count |
//! | POST | `/api/live-steps` | `{success, message, phone_number, steps}` |
//! | GET | `/health` | `{status, timestamp}` |
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use live_steps::config::Config;
//! use live_steps::server::{build_router, AppState};
//! use live_steps::storage::SqliteStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = SqliteStorage::new("./identifier.sqlite").await?;
//! let app = build_router(AppState::new(Arc::new(storage), Config::default()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

mod handlers;
mod http;
mod params;
mod responses;
mod router;
mod types;

pub use handlers::FIXED_PHONE_NUMBER;
pub use http::{shutdown_signal, HttpServer};
pub use params::{parse_upsert_body, StepsQuery};
pub use responses::{
    ApiError, ErrorResponse, HealthResponse, ListResponse, UpsertResponse,
    STORAGE_FAILURE_MESSAGE, UPSERT_SUCCESS_MESSAGE,
};
pub use router::{build_router, FIXED_PHONE_PATH, HEALTH_PATH, STEPS_PATH};
pub use types::AppState;
