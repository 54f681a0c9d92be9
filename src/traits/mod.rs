//! Trait definitions for mockable dependencies.
//!
//! - [`StepStore`]: Step record storage abstraction
//!
//! # Mocking
//!
//! Traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage::{StepRecord, StepUpdate};

/// Step record storage.
///
/// HTTP handlers depend on this trait rather than on a concrete backend,
/// so the store can be swapped for a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StepStore: Send + Sync {
    /// Insert or overwrite the record keyed by the update's phone number.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    async fn upsert(&self, update: &StepUpdate) -> Result<StepRecord, StorageError>;

    /// Current step count for a phone number, `0` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read fails. A missing record is not an error.
    async fn get_steps(&self, phone_number: &str) -> Result<i64, StorageError>;

    /// All records, most recently written first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the read fails.
    async fn list_all(&self) -> Result<Vec<StepRecord>, StorageError>;
}
