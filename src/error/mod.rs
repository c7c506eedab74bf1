//! Error types for the GrantDesk server.
//!
//! Two fault families matter to API consumers: validation failures (missing
//! or malformed input, reported as 400 with a field-level message) and store
//! faults (any persistence failure, reported as 500 with an opaque
//! per-resource message). Everything is logged server-side with the resource
//! kind and operation that hit it; internal detail never reaches the caller.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{config::ConfigError, validation::ValidationError},
    model::api::ErrorDto,
};

/// The persistence operation a store fault occurred in. Determines the verb
/// used in the opaque client-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// A list/read query.
    Fetch,
    /// A record insertion.
    Create,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Create => "create",
        }
    }
}

/// Main error type for the GrantDesk server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Validation error (missing or malformed client input).
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Persistence failure, tagged with the resource and operation it
    /// occurred in.
    #[error("Failed to {operation} {resource}: {source}", operation = .operation.verb())]
    StoreFault {
        /// Plural resource name as it appears in client-facing messages.
        resource: &'static str,
        /// The operation that failed.
        operation: Operation,
        /// The underlying database error.
        #[source]
        source: sea_orm::DbErr,
    },
    /// Database error outside of a resource operation (startup, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Internal error indicating a bug in GrantDesk's code.
    #[error("Internal error with GrantDesk's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Returns a closure wrapping a [`sea_orm::DbErr`] with resource and
    /// operation context, for use with `map_err` in service code.
    pub fn store(
        resource: &'static str,
        operation: Operation,
    ) -> impl FnOnce(sea_orm::DbErr) -> Self {
        move |source| Self::StoreFault {
            resource,
            operation,
            source,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::StoreFault {
                resource,
                operation,
                source,
            } => {
                tracing::error!(
                    resource = resource,
                    operation = operation.verb(),
                    "Store fault: {source}"
                );

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: format!("Failed to {} {}", operation.verb(), resource),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

// Lets unit tests propagate application errors with `?` alongside the
// database errors raised while seeding fixtures.
#[cfg(test)]
impl From<Error> for grantdesk_test_utils::TestError {
    fn from(error: Error) -> Self {
        grantdesk_test_utils::TestError::Other(error.to_string())
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response. Logs the full error, returns a generic message to
/// avoid leaking internal detail.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
