//! Tests for HTTP controller endpoints.
//!
//! Each submodule exercises one resource's list and create handlers directly,
//! verifying status codes, response shapes, and error handling against an
//! in-memory database.

mod application;
mod budget;
mod clause;
mod grant;

use axum::response::Response;
use grantdesk_test_utils::prelude::*;

/// Read a response body to completion and parse it as JSON.
async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}
