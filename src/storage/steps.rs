//! Step record storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use sqlx::Row;

use super::core::SqliteStorage;
use super::types::{StepRecord, StepUpdate};

impl SqliteStorage {
    /// Insert or overwrite the record for `update.phone_number()`.
    ///
    /// One statement keyed on the primary key, so concurrent writers to the
    /// same phone number resolve to last-write-wins. `SQLite` stamps the row
    /// while holding the write lock, so timestamps follow commit order.
    pub async fn upsert_steps(&self, update: &StepUpdate) -> Result<StepRecord, StorageError> {
        let stored: String = sqlx::query_scalar(
            "INSERT INTO live_steps (phone_number, steps, timestamp) \
             VALUES (?, ?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now')) \
             ON CONFLICT(phone_number) DO UPDATE SET \
             steps = excluded.steps, timestamp = excluded.timestamp \
             RETURNING timestamp",
        )
        .bind(update.phone_number())
        .bind(update.steps())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::query_error("UPSERT live_steps", format!("{e}")))?;

        Ok(StepRecord::with_timestamp(
            update.phone_number(),
            update.steps(),
            Self::parse_datetime(&stored)?,
        ))
    }

    /// Current step count for a phone number, `0` when there is no record.
    pub async fn get_steps(&self, phone_number: &str) -> Result<i64, StorageError> {
        let steps: Option<i64> =
            sqlx::query_scalar("SELECT steps FROM live_steps WHERE phone_number = ?")
                .bind(phone_number)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| Self::query_error("SELECT live_steps", format!("{e}")))?;

        Ok(steps.unwrap_or(0))
    }

    /// Full record for a phone number, if one exists.
    pub async fn get_record(&self, phone_number: &str) -> Result<Option<StepRecord>, StorageError> {
        let row = sqlx::query(
            "SELECT phone_number, steps, timestamp FROM live_steps WHERE phone_number = ?",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT live_steps", format!("{e}")))?;

        row.map(|row| Self::row_to_record(&row)).transpose()
    }

    /// Every record, most recently written first.
    ///
    /// Sorts on `strftime` so `CURRENT_TIMESTAMP` rows from older databases
    /// interleave with current ones by time.
    pub async fn list_records(&self) -> Result<Vec<StepRecord>, StorageError> {
        let rows = sqlx::query(
            "SELECT phone_number, steps, timestamp FROM live_steps \
             ORDER BY strftime('%Y-%m-%dT%H:%M:%f', timestamp) DESC, phone_number ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| Self::query_error("SELECT live_steps", format!("{e}")))?;

        rows.iter().map(Self::row_to_record).collect()
    }

    fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<StepRecord, StorageError> {
        let decode = |e: sqlx::Error| Self::query_error("DECODE live_steps", format!("{e}"));

        let phone_number: String = row.try_get("phone_number").map_err(decode)?;
        let steps: i64 = row.try_get("steps").map_err(decode)?;
        let timestamp_str: String = row.try_get("timestamp").map_err(decode)?;
        let timestamp = Self::parse_datetime(&timestamp_str)?;

        Ok(StepRecord::with_timestamp(phone_number, steps, timestamp))
    }
}
