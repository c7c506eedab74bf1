//! Environment-driven server configuration.

use crate::error::config::ConfigError;

/// Runtime configuration loaded from environment variables.
pub struct Config {
    /// Database connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Address the HTTP listener binds to (`HOST`, defaults to `0.0.0.0`).
    pub host: String,
    /// Port the HTTP listener binds to (`PORT`, defaults to `8080`).
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("expected a port number, got {value:?}"),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
