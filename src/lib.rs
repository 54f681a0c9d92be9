//! Live Steps
//!
//! A small HTTP service that keeps the latest step count for each phone
//! number in `SQLite`.
//!
//! # Features
//!
//! - Upsert-by-key writes (last write wins, one row per phone number)
//! - Keyed lookup returning `0` for unknown numbers
//! - Full listing, most recently updated first
//! - Permissive or allow-listed CORS
//!
//! # Quick Start
//!
//! ```bash
//! PORT=3000 DB_PATH=./identifier.sqlite ./live-steps
//! curl -X POST localhost:3000/api/live-steps \
//!   -H 'content-type: application/json' \
//!   -d '{"phone_number":"5551234567","steps":42}'
//! curl 'localhost:3000/api/live-steps?phone_number=5551234567'
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     HTTP      ┌─────────────────┐
//! │   Client    │──────────────▶│  axum Router    │
//! │             │◀──────────────│     (Rust)      │
//! └─────────────┘               └────────┬────────┘
//!                                        │ StepStore
//!                                        ▼
//!                                     SQLite
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod logging;
pub mod seed;
pub mod server;
pub mod storage;
pub mod traits;

#[cfg(test)]
mod test_utils;
