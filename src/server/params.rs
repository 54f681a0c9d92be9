//! Request parameter types and body parsing.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::storage::StepUpdate;

/// Query string of `GET /api/live-steps`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepsQuery {
    /// Optional key filter. An empty value is treated as absent.
    pub phone_number: Option<String>,
}

impl StepsQuery {
    /// The phone number to look up, if a non-empty one was given.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.phone_number.as_deref().filter(|p| !p.is_empty())
    }
}

/// Turn a JSON upsert body into a validated [`StepUpdate`].
///
/// Presence of both fields is checked before the type of `steps`, so a body
/// missing `phone_number` reports missing fields even if `steps` is also bad.
///
/// # Errors
///
/// - [`ValidationError::MalformedBody`] if the body is not a JSON object
/// - [`ValidationError::MissingRequiredFields`] if `phone_number` is absent,
///   empty or not a string, or `steps` is absent
/// - [`ValidationError::InvalidSteps`] if `steps` is not an `i64` or is negative
pub fn parse_upsert_body(body: &Value) -> Result<StepUpdate, ValidationError> {
    let fields = body.as_object().ok_or(ValidationError::MalformedBody)?;

    let phone_number = match fields.get("phone_number") {
        Some(Value::String(phone)) if !phone.is_empty() => phone,
        _ => return Err(ValidationError::MissingRequiredFields),
    };
    let steps = fields
        .get("steps")
        .ok_or(ValidationError::MissingRequiredFields)?;

    let steps = steps.as_i64().ok_or(ValidationError::InvalidSteps)?;

    StepUpdate::new(phone_number.as_str(), steps)
}
