//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Upsert-by-key writes of step records
//! - Keyed and full-table reads
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async operations.
//! Every write is a single statement keyed on `phone_number`, which `SQLite`
//! applies atomically.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, schema bootstrap, and helper functions
//! - `steps`: Step record operations
//! - `trait_impl`: `StepStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use live_steps::storage::{SqliteStorage, StepUpdate};
//!
//! let storage = SqliteStorage::new("./identifier.sqlite").await?;
//! storage.upsert_steps(&StepUpdate::new("5551234567", 42)?).await?;
//! assert_eq!(storage.get_steps("5551234567").await?, 42);
//! ```

mod core;
mod steps;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use types::{StepRecord, StepUpdate};
