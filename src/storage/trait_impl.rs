//! `StepStore` implementation for `SqliteStorage`.

#![allow(clippy::missing_errors_doc)]

use async_trait::async_trait;

use crate::error::StorageError;
use crate::traits::StepStore;

use super::core::SqliteStorage;
use super::types::{StepRecord, StepUpdate};

#[async_trait]
impl StepStore for SqliteStorage {
    async fn upsert(&self, update: &StepUpdate) -> Result<StepRecord, StorageError> {
        self.upsert_steps(update).await
    }

    async fn get_steps(&self, phone_number: &str) -> Result<i64, StorageError> {
        Self::get_steps(self, phone_number).await
    }

    async fn list_all(&self) -> Result<Vec<StepRecord>, StorageError> {
        self.list_records().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_utils::test_storage;
    use serial_test::serial;
    use std::sync::Arc;

    #[tokio::test]
    #[serial]
    async fn test_store_through_trait_object() {
        let store: Arc<dyn StepStore> = Arc::new(test_storage().await);

        let update = StepUpdate::new("3333333333", 3000).unwrap();
        let record = store.upsert(&update).await.unwrap();
        assert_eq!(record.steps, 3000);

        assert_eq!(store.get_steps("3333333333").await.unwrap(), 3000);
        assert_eq!(store.get_steps("4444444444").await.unwrap(), 0);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].phone_number, "3333333333");
    }
}
