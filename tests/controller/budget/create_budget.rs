//! Tests for the create_budget endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use grantdesk::{
    controller::budget::create_budget,
    model::budget::{CreateBudgetDto, CreateBudgetLineItemDto},
};
use sea_orm::ActiveModelTrait;

use super::*;

async fn seed_application(test: &TestSetup) -> Result<(), TestError> {
    factory::user("U1").insert(&test.db).await?;
    factory::grant("G1").insert(&test.db).await?;
    factory::application("A1", "G1", "U1").insert(&test.db).await?;

    Ok(())
}

/// Expected: Ok with 201 Created, nested line item persisted with its
/// generated identifier and stated total cost.
#[tokio::test]
async fn success_with_nested_line_item() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;
    seed_application(&test).await?;

    let payload = CreateBudgetDto {
        application_id: Some("A1".to_string()),
        total_amount: Some(500.0),
        line_items: Some(vec![CreateBudgetLineItemDto {
            category: Some("equipment".to_string()),
            description: Some("Laptop".to_string()),
            unit_cost: Some(500.0),
            total_cost: Some(500.0),
            ..Default::default()
        }]),
        ..Default::default()
    };

    let result = create_budget(State(test.state()), Json(payload)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["applicationId"], "A1");
    assert_eq!(body["totalAmount"], 500.0);
    assert_eq!(body["currency"], "USD");

    let item = &body["lineItems"][0];
    assert_eq!(item["totalCost"], 500.0);
    assert_eq!(item["quantity"], 1.0);
    assert_eq!(item["unit"], "each");
    assert!(!item["id"].as_str().unwrap().is_empty());

    Ok(())
}

/// Expected: Err with 400 Bad Request when no application is named.
#[tokio::test]
async fn error_with_missing_application_id() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;
    seed_application(&test).await?;

    let payload = CreateBudgetDto {
        total_amount: Some(500.0),
        ..Default::default()
    };

    let result = create_budget(State(test.state()), Json(payload)).await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("applicationId"));

    Ok(())
}
