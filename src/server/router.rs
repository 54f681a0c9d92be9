//! Route table and middleware.

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::types::AppState;
use crate::config::Config;

/// Path of the list / lookup / upsert resource.
pub const STEPS_PATH: &str = "/api/live-steps";

/// Path of the fixed-key alias.
pub const FIXED_PHONE_PATH: &str = "/api/live-steps/1111111111";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Build the application router over the given state.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route(
            STEPS_PATH,
            get(handlers::read_steps).post(handlers::upsert_steps),
        )
        .route(FIXED_PHONE_PATH, get(handlers::read_fixed_steps))
        .route(HEALTH_PATH, get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
