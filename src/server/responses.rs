//! Response bodies and error-to-HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ValidationError};
use crate::storage::StepRecord;

/// Message returned on a successful upsert.
pub const UPSERT_SUCCESS_MESSAGE: &str = "Record updated successfully";

/// Generic body for storage failures; details only go to the log.
pub const STORAGE_FAILURE_MESSAGE: &str = "Database error";

/// Body of `GET /api/live-steps` without a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    /// Always true.
    pub success: bool,
    /// Records, newest first.
    pub data: Vec<StepRecord>,
    /// Number of records in `data`.
    pub count: usize,
}

impl ListResponse {
    /// Wrap a list of records.
    #[must_use]
    pub fn new(data: Vec<StepRecord>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Body of a successful `POST /api/live-steps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertResponse {
    /// Always true.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Stored key.
    pub phone_number: String,
    /// Stored step count.
    pub steps: i64,
}

impl From<StepRecord> for UpsertResponse {
    fn from(record: StepRecord) -> Self {
        Self {
            success: true,
            message: UPSERT_SUCCESS_MESSAGE.to_string(),
            phone_number: record.phone_number,
            steps: record.steps,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"OK"`.
    pub status: String,
    /// Current time, RFC 3339 with milliseconds.
    pub timestamp: String,
}

impl HealthResponse {
    /// A response stamped with the current time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Request-level failure, rendered as an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Rejected input (400).
    Validation(ValidationError),
    /// Storage failure (500).
    Storage(StorageError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::Validation(err) => {
                tracing::debug!(error = %err, "Rejected request");
                err.to_string()
            }
            Self::Storage(err) => {
                tracing::error!(error = %err, "Storage operation failed");
                STORAGE_FAILURE_MESSAGE.to_string()
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_list_response_counts_records() {
        let response = ListResponse::new(vec![
            StepRecord::new("1111111111", 1),
            StepRecord::new("2222222222", 2),
        ]);
        assert!(response.success);
        assert_eq!(response.count, 2);

        let empty = ListResponse::new(Vec::new());
        assert_eq!(empty.count, 0);
    }

    #[test]
    fn test_upsert_response_shape() {
        let response = UpsertResponse::from(StepRecord::new("5551234567", 42));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "message": "Record updated successfully",
                "phone_number": "5551234567",
                "steps": 42
            })
        );
    }

    #[test]
    fn test_health_response_now() {
        let health = HealthResponse::now();
        assert_eq!(health.status, "OK");
        assert!(health.timestamp.ends_with('Z'));
        assert!(health.timestamp.parse::<chrono::DateTime<Utc>>().is_ok());
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(
            ApiError::from(ValidationError::InvalidSteps).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(StorageError::Internal {
                message: "x".to_string()
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_storage_error_body_is_generic() {
        let response = ApiError::from(StorageError::QueryFailed {
            query: "SELECT live_steps".to_string(),
            message: "disk I/O error".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, STORAGE_FAILURE_MESSAGE);
    }
}
