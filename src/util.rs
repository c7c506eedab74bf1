//! Small shared helpers: record id generation and permissive-but-validated
//! date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rand::{distr::Alphanumeric, Rng};

use crate::error::validation::ValidationError;

/// Length of generated record identifiers.
const ID_LEN: usize = 24;

/// Generates an opaque alphanumeric record identifier.
pub fn generate_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

/// Parses an ISO-8601-like date string.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS`, and bare `YYYY-MM-DD`
/// (interpreted as midnight). Anything else is a [`ValidationError`] naming
/// the offending field, never a store fault.
pub fn parse_datetime(field: &'static str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.naive_utc());
    }

    if let Ok(datetime) = value.parse::<NaiveDateTime>() {
        return Ok(datetime);
    }

    if let Ok(date) = value.parse::<NaiveDate>() {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }

    Err(ValidationError::InvalidField {
        field,
        reason: format!("expected an ISO-8601 date, got {value:?}"),
    })
}
