//! Storage types for database operations.
//!
//! - [`StepRecord`]: A stored row of the `live_steps` table
//! - [`StepUpdate`]: Validated input for an upsert

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Latest step count for one phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Unique key.
    pub phone_number: String,
    /// Latest known step count.
    pub steps: i64,
    /// Time of the last write.
    pub timestamp: DateTime<Utc>,
}

impl StepRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(phone_number: impl Into<String>, steps: i64) -> Self {
        Self::with_timestamp(phone_number, steps, Utc::now())
    }

    /// Create a record with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(
        phone_number: impl Into<String>,
        steps: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            steps,
            timestamp,
        }
    }
}

/// An upsert that has passed validation.
///
/// The phone number is non-empty and the step count is non-negative;
/// there is no other way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepUpdate {
    phone_number: String,
    steps: i64,
}

impl StepUpdate {
    /// Validate and build an update.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingRequiredFields`] if `phone_number` is empty
    /// - [`ValidationError::InvalidSteps`] if `steps` is negative
    pub fn new(phone_number: impl Into<String>, steps: i64) -> Result<Self, ValidationError> {
        let phone_number = phone_number.into();
        if phone_number.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if steps < 0 {
            return Err(ValidationError::InvalidSteps);
        }
        Ok(Self {
            phone_number,
            steps,
        })
    }

    /// The key being written.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The step count being written.
    #[must_use]
    pub const fn steps(&self) -> i64 {
        self.steps
    }
}
