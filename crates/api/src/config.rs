//! API service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//!
//! - `MONGODB_URI` - MongoDB connection string (may embed credentials)
//!
//! ## Optional
//!
//! - `MONGODB_DB` - Database name (default: `orderdesk`)
//! - `ORDERDESK_HOST` - Bind address (default: `127.0.0.1`)
//! - `ORDERDESK_PORT` - Listen port (default: `5000`)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Database name used when `MONGODB_DB` is unset.
pub const DEFAULT_DATABASE: &str = "orderdesk";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API service configuration.
///
/// The connection string is wrapped in [`SecretString`] so embedded
/// credentials never end up in debug output or logs.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// MongoDB connection string
    pub mongodb_uri: SecretString,
    /// Database name
    pub database: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one exists. `MONGODB_URI` is required;
    /// everything else falls back to a default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `MONGODB_URI` is unset, or
    /// `ConfigError::InvalidEnvVar` if the host or port fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mongodb_uri = SecretString::from(get_required_env("MONGODB_URI")?);
        let database = get_env_or_default("MONGODB_DB", DEFAULT_DATABASE);
        let host = parse_env_or_default("ORDERDESK_HOST", "127.0.0.1")?;
        let port = parse_env_or_default("ORDERDESK_PORT", "5000")?;

        Ok(Self {
            mongodb_uri,
            database,
            host,
            port,
        })
    }

    /// The socket address the server should bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_owned()))
}

/// Get an environment variable with a default fallback.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Get an environment variable (or its default) and parse it.
fn parse_env_or_default<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(name, default)
        .parse()
        .map_err(|err: T::Err| ConfigError::InvalidEnvVar(name.to_owned(), err.to_string()))
}
