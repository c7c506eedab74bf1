//! Tests for the list_budgets endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use grantdesk::{controller::budget::list_budgets, model::budget::BudgetListQuery};
use sea_orm::ActiveModelTrait;

use super::*;

/// Expected: Ok with 200 OK and an empty array when no budgets exist.
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let result = list_budgets(State(test.state()), Query(BudgetListQuery::default())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}

/// Expected: `applicationId=A1` returns only that application's budgets,
/// each carrying its line items and parent application record.
#[tokio::test]
async fn success_filters_by_application() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    factory::user("U1").insert(&test.db).await?;
    factory::grant("G1").insert(&test.db).await?;
    factory::application("A1", "G1", "U1").insert(&test.db).await?;
    factory::application("A2", "G1", "U1").insert(&test.db).await?;
    factory::budget("B1", "A1").insert(&test.db).await?;
    factory::budget("B2", "A2").insert(&test.db).await?;
    factory::line_item("L1", "B1").insert(&test.db).await?;

    let query = BudgetListQuery {
        application_id: Some("A1".to_string()),
    };

    let result = list_budgets(State(test.state()), Query(query)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "B1");
    assert_eq!(rows[0]["lineItems"][0]["id"], "L1");
    assert_eq!(rows[0]["application"]["id"], "A1");

    Ok(())
}
