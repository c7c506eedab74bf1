//! Tests for budget controller endpoints.

mod create_budget;
mod list_budgets;

use super::*;
