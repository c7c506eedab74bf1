//! Service layer: validation, defaulting, projection, and error context for
//! each resource's list and create operations.

pub mod application;
pub mod budget;
pub mod clause;
pub mod grant;

use crate::error::validation::ValidationError;

/// Unwraps a required payload field or reports which one is missing.
fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}
