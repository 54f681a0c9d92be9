//! Configuration validation.
//!
//! This module provides validation logic for configuration values.

use super::Config;
use crate::error::ConfigError;

/// Wildcard CORS origin.
pub const ANY_ORIGIN: &str = "*";

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `PORT` is `0`
/// - `DB_PATH` is empty
/// - any `CORS_ORIGINS` entry is neither `*` nor an `http://`/`https://` origin
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.port == 0 {
        return Err(ConfigError::InvalidValue {
            var: "PORT".into(),
            reason: "must be a port number between 1 and 65535".into(),
        });
    }

    if config.database_path.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DB_PATH".into(),
            reason: "must not be empty".into(),
        });
    }

    if let Some(bad) = config
        .cors_origins
        .iter()
        .find(|origin| !is_valid_origin(origin))
    {
        return Err(ConfigError::InvalidValue {
            var: "CORS_ORIGINS".into(),
            reason: format!("'{bad}' is not '*' or an http(s) origin"),
        });
    }

    Ok(())
}

fn is_valid_origin(origin: &str) -> bool {
    if origin == ANY_ORIGIN {
        return true;
    }
    let rest = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}
