//! Tests for clause library controller endpoints.

mod create_clause;
mod list_clauses;

use super::*;
