//! HTTP request handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use super::params::{parse_upsert_body, StepsQuery};
use super::responses::{ApiError, HealthResponse, ListResponse, UpsertResponse};
use super::types::AppState;
use crate::error::ValidationError;

/// Phone number served by the fixed-key alias route.
pub const FIXED_PHONE_NUMBER: &str = "1111111111";

/// `GET /api/live-steps`: every record, or one plain-text count when filtered.
pub async fn read_steps(
    State(state): State<AppState>,
    query: Result<Query<StepsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable query string");
        ValidationError::InvalidQuery
    })?;

    match query.filter() {
        Some(phone_number) => Ok(steps_for(&state, phone_number).await?.into_response()),
        None => Ok(list_all(&state).await?.into_response()),
    }
}

/// `GET /api/live-steps/1111111111`.
pub async fn read_fixed_steps(State(state): State<AppState>) -> Result<String, ApiError> {
    steps_for(&state, FIXED_PHONE_NUMBER).await
}

/// `POST /api/live-steps`: validate then upsert.
///
/// A body without a JSON content type is read as an empty object.
pub async fn upsert_steps(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpsertResponse>, ApiError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(serde_json::Map::new()),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable upsert body");
            return Err(ValidationError::MalformedBody.into());
        }
    };
    let update = parse_upsert_body(&body)?;

    let record = state.store.upsert(&update).await?;
    tracing::info!(
        phone_number = %record.phone_number,
        steps = record.steps,
        "Record updated successfully"
    );

    Ok(Json(record.into()))
}

/// `GET /health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}

async fn steps_for(state: &AppState, phone_number: &str) -> Result<String, ApiError> {
    let steps = state.store.get_steps(phone_number).await?;
    tracing::debug!(phone_number, steps, "Live steps lookup");
    Ok(steps.to_string())
}

async fn list_all(state: &AppState) -> Result<Json<ListResponse>, ApiError> {
    let records = state.store.list_all().await?;
    tracing::debug!(count = records.len(), "Fetched records from database");
    Ok(Json(ListResponse::new(records)))
}
