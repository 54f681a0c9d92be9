//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with optional `.env` file)
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use live_steps::config::{Config, DEFAULT_DATABASE_PATH, DEFAULT_PORT};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     host: "127.0.0.1".parse().unwrap(),
//!     port: DEFAULT_PORT,
//!     database_path: DEFAULT_DATABASE_PATH.to_string(),
//!     log_level: "info".to_string(),
//!     cors_origins: Vec::new(),
//! };
//!
//! assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
//! assert!(config.allows_any_origin());
//! ```

mod validation;

pub use validation::{validate_config, ANY_ORIGIN};

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address (all interfaces).
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./identifier.sqlite";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to bind the HTTP listener to.
    pub host: IpAddr,
    /// Listening port.
    pub port: u16,
    /// `SQLite` database file location.
    pub database_path: String,
    /// Log level (error, warn, info, debug, trace) or an env-filter directive.
    pub log_level: String,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `PORT`: Listening port (default: `3000`)
    /// - `HOST`: Bind address (default: `0.0.0.0`)
    /// - `DB_PATH`: Path to `SQLite` database (default: `./identifier.sqlite`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `CORS_ORIGINS`: Comma-separated allowed origins (default: any)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `PORT` or `HOST` do not parse,
    /// or if any value fails validation (see [`validate_config`]).
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let port = parse_env_port("PORT", DEFAULT_PORT)?;
        let host = parse_env_host("HOST", DEFAULT_HOST)?;

        let database_path =
            std::env::var("DB_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|val| parse_origin_list(&val))
            .unwrap_or_default();

        let config = Self {
            host,
            port,
            database_path,
            log_level,
            cors_origins,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// The socket address the HTTP listener binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns true when CORS should allow any origin.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

/// Parse an environment variable as a port, using a default if not set.
fn parse_env_port(name: &str, default: u16) -> Result<u16, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a port number between 1 and 65535".into(),
        })
    })
}

/// Parse an environment variable as an IP address, using a default if not set.
fn parse_env_host(name: &str, default: IpAddr) -> Result<IpAddr, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be an IP address".into(),
        })
    })
}

/// Split a comma-separated origin list, dropping blank entries.
fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
