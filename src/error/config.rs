use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// Configuration error (environment variable problems).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set but unusable.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// The variable name.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
