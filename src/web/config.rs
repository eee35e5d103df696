//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured when present.

use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";
const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Runtime configuration for the todo web application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection URL; `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub database_pool_size: u32,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Secret mixed into anti-forgery tokens.
    pub csrf_secret: String,
    /// Header carrying the authenticated user identifier.
    pub identity_header: String,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `DATABASE_URL` | unset (in-memory store) |
    /// | `DATABASE_POOL_SIZE` | `8` |
    /// | `APP_HOST` | `0.0.0.0` |
    /// | `APP_PORT` | `8080` |
    /// | `CSRF_SECRET` | required |
    /// | `IDENTITY_HEADER` | `x-user-id` |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `CSRF_SECRET` is unset and
    /// [`ConfigError::InvalidValue`] for malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|value| !value.trim().is_empty());
        let database_pool_size = parse_or(&lookup, "DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE)?;
        if database_pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_POOL_SIZE".to_owned(),
                message: "must be at least 1".to_owned(),
            });
        }

        let app_host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let app_port = parse_or(&lookup, "APP_PORT", DEFAULT_PORT)?;

        let csrf_secret = lookup("CSRF_SECRET")
            .ok_or_else(|| ConfigError::MissingEnvVar("CSRF_SECRET".to_owned()))?;
        if csrf_secret.len() < 16 {
            return Err(ConfigError::InvalidValue {
                key: "CSRF_SECRET".to_owned(),
                message: "must be at least 16 bytes".to_owned(),
            });
        }

        let identity_header =
            lookup("IDENTITY_HEADER").unwrap_or_else(|| DEFAULT_IDENTITY_HEADER.to_owned());

        Ok(Self {
            database_url,
            database_pool_size,
            app_host,
            app_port,
            csrf_secret,
            identity_header,
        })
    }

    /// Returns the `host:port` socket address string.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|err| ConfigError::InvalidValue {
                key: key.to_owned(),
                message: err.to_string(),
            })
    })
}
