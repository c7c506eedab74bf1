//! Tests for the create_grant endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use grantdesk::{controller::grant::create_grant, model::grant::CreateGrantDto};

use super::*;

fn minimal_payload() -> CreateGrantDto {
    CreateGrantDto {
        title: Some("Rural Broadband Fund".to_string()),
        organization: Some("Infrastructure Alliance".to_string()),
        description: Some("Expands broadband access in rural districts".to_string()),
        sector: Some("infrastructure".to_string()),
        deadline: Some("2026-12-01".to_string()),
        ..Default::default()
    }
}

/// Expected: Ok with 201 Created and defaults applied for currency,
/// timezone, status, and the saved and bookmarked flags.
#[tokio::test]
async fn success_with_defaults() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let result = create_grant(State(test.state()), Json(minimal_payload())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Rural Broadband Fund");
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["timezone"], "UTC");
    assert_eq!(body["status"], "active");
    assert_eq!(body["saved"], false);
    assert_eq!(body["bookmarked"], false);

    Ok(())
}

/// Expected: Err with 400 Bad Request naming the missing field.
#[tokio::test]
async fn error_with_missing_deadline() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let mut payload = minimal_payload();
    payload.deadline = None;

    let result = create_grant(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("deadline"));

    Ok(())
}

/// Expected: Err with 400 Bad Request when the deadline cannot be parsed.
#[tokio::test]
async fn error_with_unparseable_deadline() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let mut payload = minimal_payload();
    payload.deadline = Some("whenever".to_string());

    let result = create_grant(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
