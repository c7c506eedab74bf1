//! Tests for the create_clause endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use grantdesk::{controller::clause::create_clause, model::clause::CreateClauseDto};

use super::*;

fn minimal_payload() -> CreateClauseDto {
    CreateClauseDto {
        title: Some("Indemnification".to_string()),
        category: Some("liability".to_string()),
        text: Some("The recipient shall hold harmless".to_string()),
        ..Default::default()
    }
}

/// Expected: Ok with 201 Created, risk rating defaulted to medium and the
/// clause marked standard.
#[tokio::test]
async fn success_with_defaults() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let result = create_clause(State(test.state()), Json(minimal_payload())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Indemnification");
    assert_eq!(body["riskRating"], "medium");
    assert_eq!(body["isStandard"], true);
    assert!(!body["id"].as_str().unwrap().is_empty());

    Ok(())
}

/// Expected: Err with 400 Bad Request naming the missing field.
#[tokio::test]
async fn error_with_missing_text() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let mut payload = minimal_payload();
    payload.text = None;

    let result = create_clause(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("text"));

    Ok(())
}
