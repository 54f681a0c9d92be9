//! Test utilities and fixtures.
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::error::StorageError;
use crate::storage::SqliteStorage;
use crate::traits::MockStepStore;

/// Fresh in-memory store with the schema applied.
pub async fn test_storage() -> SqliteStorage {
    SqliteStorage::new_in_memory()
        .await
        .expect("Failed to create test storage")
}

/// Mock store whose every operation fails with a storage error.
#[must_use]
pub fn failing_store() -> MockStepStore {
    let mut store = MockStepStore::new();
    store.expect_upsert().returning(|update| {
        Err(StorageError::QueryFailed {
            query: "UPSERT live_steps".to_string(),
            message: format!("database is locked ({})", update.phone_number()),
        })
    });
    store.expect_get_steps().returning(|_| {
        Err(StorageError::ConnectionFailed {
            message: "gone".to_string(),
        })
    });
    store.expect_list_all().returning(|| {
        Err(StorageError::Internal {
            message: "corrupt".to_string(),
        })
    });
    store
}
