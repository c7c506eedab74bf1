//! Tests for the list_clauses endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use grantdesk::{controller::clause::list_clauses, model::clause::ClauseListQuery};
use sea_orm::{ActiveModelTrait, ActiveValue};

use super::*;

/// Expected: a mixed-case needle matches clause titles and body text
/// case-insensitively.
#[tokio::test]
async fn success_with_case_insensitive_search() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let mut indemnification = factory::clause("C1");
    indemnification.title = ActiveValue::Set("Indemnification Clause".to_string());
    indemnification.text = ActiveValue::Set("The recipient shall hold harmless".to_string());
    indemnification.insert(&test.db).await?;

    let mut termination = factory::clause("C2");
    termination.title = ActiveValue::Set("Termination".to_string());
    termination.text = ActiveValue::Set("Either party may terminate with notice".to_string());
    termination.insert(&test.db).await?;

    let query = ClauseListQuery {
        search: Some("iNdEmNiF".to_string()),
        ..Default::default()
    };

    let result = list_clauses(State(test.state()), Query(query)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "C1");

    Ok(())
}

/// Expected: `isStandard=false` matches only non-standard clauses, while the
/// `"all"` sentinel leaves the list unconstrained.
#[tokio::test]
async fn success_filters_by_standard_flag() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    factory::clause("C1").insert(&test.db).await?;

    let mut negotiated = factory::clause("C2");
    negotiated.is_standard = ActiveValue::Set(false);
    negotiated.insert(&test.db).await?;

    let query = ClauseListQuery {
        is_standard: Some("false".to_string()),
        ..Default::default()
    };

    let result = list_clauses(State(test.state()), Query(query)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "C2");

    let all_query = ClauseListQuery {
        is_standard: Some("all".to_string()),
        ..Default::default()
    };

    let result = list_clauses(State(test.state()), Query(all_query)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}
