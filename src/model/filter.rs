//! Pure conversion helpers from raw query-parameter strings to typed filter
//! fields.
//!
//! The rules are deliberately permissive: absent parameters, the sentinel
//! value `"all"`, unparseable numbers, and non-boolean flag values all mean
//! "no constraint on this field". No parameter combination is an error.

/// Sentinel query-parameter value meaning "do not filter on this field".
pub const ALL: &str = "all";

/// Exact-match parameter: constrains only when present, nonempty, and not
/// the `"all"` sentinel.
pub fn exact(param: Option<String>) -> Option<String> {
    param.filter(|value| !value.is_empty() && value != ALL)
}

/// Boolean parameter: constrains only for the literal strings `"true"` and
/// `"false"`; any other value means no constraint.
pub fn flag(param: Option<String>) -> Option<bool> {
    match param.as_deref() {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Numeric parameter: unparseable input is treated as absent, never as an
/// error.
pub fn amount(param: Option<String>) -> Option<f64> {
    param.and_then(|value| value.parse::<f64>().ok())
}

/// Free-text search parameter: empty (or whitespace-only) search means no
/// constraint.
pub fn search(param: Option<String>) -> Option<String> {
    param
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
