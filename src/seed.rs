//! Demo fixture loader used by the `live-steps-seed` binary.

use crate::storage::StepUpdate;
use crate::traits::StepStore;

/// Ten demo phone numbers with round step counts.
pub const DEMO_RECORDS: [(&str, i64); 10] = [
    ("1111111111", 1000),
    ("2222222222", 2000),
    ("3333333333", 3000),
    ("4444444444", 4000),
    ("5555555555", 5000),
    ("6666666666", 6000),
    ("7777777777", 7000),
    ("8888888888", 8000),
    ("9999999999", 9000),
    ("0000000000", 10000),
];

/// Outcome of a seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Records written.
    pub written: usize,
    /// Records that failed; seeding continues past them.
    pub failed: usize,
}

/// Upsert each `(phone_number, steps)` pair, logging every outcome.
pub async fn seed(store: &dyn StepStore, records: &[(&str, i64)]) -> SeedReport {
    let mut report = SeedReport::default();

    for (index, (phone_number, steps)) in records.iter().enumerate() {
        let position = index + 1;
        let result = match StepUpdate::new(*phone_number, *steps) {
            Ok(update) => store.upsert(&update).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(record) => {
                report.written += 1;
                tracing::info!(
                    "Record {position}: {} - {} steps",
                    record.phone_number,
                    record.steps
                );
            }
            Err(e) => {
                report.failed += 1;
                tracing::warn!("Failed to insert record {position}: {phone_number}: {e}");
            }
        }
    }

    report
}
