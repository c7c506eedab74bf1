//! Tests for the create_application endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use grantdesk::{
    controller::application::create_application, model::application::CreateApplicationDto,
};
use sea_orm::ActiveModelTrait;

use super::*;

async fn seed_references(test: &TestSetup) -> Result<(), TestError> {
    factory::user("U1").insert(&test.db).await?;
    factory::grant("G1").insert(&test.db).await?;

    Ok(())
}

fn minimal_payload() -> CreateApplicationDto {
    CreateApplicationDto {
        opportunity_id: Some("G1".to_string()),
        title: Some("Community Health Initiative".to_string()),
        author_id: Some("U1".to_string()),
        ..Default::default()
    }
}

/// Expected: Ok with 201 Created, status defaulted to idea, no version.
#[tokio::test]
async fn success_with_minimal_payload() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;
    seed_references(&test).await?;

    let result = create_application(State(test.state()), Json(minimal_payload())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["title"], "Community Health Initiative");
    assert_eq!(body["status"], "idea");
    assert_eq!(body["currentVersion"], serde_json::Value::Null);
    assert!(!body["id"].as_str().unwrap().is_empty());

    Ok(())
}

/// Expected: supplying content creates version 1 atomically and returns it
/// as the current version.
#[tokio::test]
async fn success_with_content_creates_current_version() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;
    seed_references(&test).await?;

    let mut payload = minimal_payload();
    payload.content = Some("Our program serves rural clinics".to_string());
    payload.word_count = Some(5);
    payload.char_count = Some(31);

    let result = create_application(State(test.state()), Json(payload)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let version = &body["currentVersion"];
    assert_eq!(version["versionNumber"], 1);
    assert_eq!(version["isCurrent"], true);
    assert_eq!(version["content"], "Our program serves rural clinics");
    assert_eq!(version["wordCount"], 5);

    Ok(())
}

/// Expected: Err with 400 Bad Request naming the missing field.
#[tokio::test]
async fn error_with_missing_title() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;
    seed_references(&test).await?;

    let mut payload = minimal_payload();
    payload.title = None;

    let result = create_application(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("title"));

    Ok(())
}

/// Expected: Err with 400 Bad Request when the submission date cannot be
/// parsed, with no application row created.
#[tokio::test]
async fn error_with_unparseable_submission_date() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;
    seed_references(&test).await?;

    let mut payload = minimal_payload();
    payload.submission_date = Some("not-a-date".to_string());

    let result = create_application(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
