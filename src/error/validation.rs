//! Client-input validation errors.
//!
//! Raised when a create payload is missing a required field or carries a
//! value that cannot be interpreted (e.g. an unparseable date). Always maps
//! to 400 Bad Request with a field-level message; never to a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation error on client-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent from the payload.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    /// A field was present but its value could not be interpreted.
    #[error("Invalid value for field {field}: {reason}")]
    InvalidField {
        /// The payload field name as the client sent it.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {self}");

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
