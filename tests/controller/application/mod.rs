//! Tests for application controller endpoints.

mod create_application;
mod list_applications;

use super::*;
