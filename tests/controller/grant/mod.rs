//! Tests for grant opportunity controller endpoints.

mod create_grant;
mod list_grants;

use super::*;
