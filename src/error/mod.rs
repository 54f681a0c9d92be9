//! Error types for the live-steps service.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`StorageError`]: Database operation errors
//! - [`ValidationError`]: Rejected upsert input
//! - [`ServerError`]: HTTP listener errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Returned by startup and serving code. Request-level failures, including
/// every [`ValidationError`], are mapped to HTTP responses instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Server error.
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Schema bootstrap failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Upsert input that failed the type/sign checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `phone_number` is absent or empty, or `steps` is absent.
    #[error("phone_number and steps are required fields")]
    MissingRequiredFields,

    /// `steps` is not an integer or is negative.
    #[error("steps must be a non-negative integer")]
    InvalidSteps,

    /// The request body is not a JSON object.
    #[error("request body must be a JSON object")]
    MalformedBody,

    /// The query string could not be decoded.
    #[error("invalid query string")]
    InvalidQuery,
}

/// HTTP server errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// Could not bind the listening socket.
    #[error("Failed to bind {addr}: {message}")]
    Bind {
        /// The address that could not be bound.
        addr: String,
        /// Description of the failure.
        message: String,
    },

    /// The server loop failed while serving.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the failure.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
