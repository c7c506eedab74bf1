//! Tests for the list_grants endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use grantdesk::{controller::grant::list_grants, model::grant::GrantListQuery};
use sea_orm::{ActiveModelTrait, ActiveValue};

use super::*;

/// Expected: grants come back soonest deadline first.
#[tokio::test]
async fn success_orders_by_deadline_ascending() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let mut late = factory::grant("G1");
    late.deadline = ActiveValue::Set(factory::timestamp(60));
    late.insert(&test.db).await?;

    let mut soon = factory::grant("G2");
    soon.deadline = ActiveValue::Set(factory::timestamp(5));
    soon.insert(&test.db).await?;

    let result = list_grants(State(test.state()), Query(GrantListQuery::default())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "G2");
    assert_eq!(rows[1]["id"], "G1");

    Ok(())
}

/// Expected: `minAmount` keeps grants whose lower bound meets the floor and
/// drops grants with no stated bound.
#[tokio::test]
async fn success_filters_by_minimum_amount() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let mut large = factory::grant("G1");
    large.amount_min = ActiveValue::Set(Some(100_000.0));
    large.insert(&test.db).await?;

    let mut small = factory::grant("G2");
    small.amount_min = ActiveValue::Set(Some(5_000.0));
    small.insert(&test.db).await?;

    let mut unbounded = factory::grant("G3");
    unbounded.amount_min = ActiveValue::Set(None);
    unbounded.insert(&test.db).await?;

    let query = GrantListQuery {
        min_amount: Some("50000".to_string()),
        ..Default::default()
    };

    let result = list_grants(State(test.state()), Query(query)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "G1");

    Ok(())
}

/// Expected: an unparseable amount is ignored rather than rejected.
#[tokio::test]
async fn success_ignores_unparseable_amount() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    factory::grant("G1").insert(&test.db).await?;

    let query = GrantListQuery {
        min_amount: Some("lots".to_string()),
        ..Default::default()
    };

    let result = list_grants(State(test.state()), Query(query)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    Ok(())
}
