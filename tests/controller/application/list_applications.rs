//! Tests for the list_applications endpoint.
//!
//! Covers the empty list, status and author filtering with the `"all"`
//! sentinel, and attachment of related records to each projected row.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use grantdesk::{controller::application::list_applications, model::application::ApplicationListQuery};
use sea_orm::{ActiveModelTrait, ActiveValue};

use super::*;

/// Expected: Ok with 200 OK and an empty array when no applications exist.
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    let result = list_applications(
        State(test.state()),
        Query(ApplicationListQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!([]));

    Ok(())
}

/// Expected: `status=all&authorId=U1` constrains only by author, returning
/// both of U1's applications and neither of U2's.
#[tokio::test]
async fn success_filters_by_author_with_status_sentinel() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    factory::user("U1").insert(&test.db).await?;
    factory::user("U2").insert(&test.db).await?;
    factory::grant("G1").insert(&test.db).await?;
    factory::application("A1", "G1", "U1").insert(&test.db).await?;
    factory::application("A2", "G1", "U1").insert(&test.db).await?;
    factory::application("A3", "G1", "U2").insert(&test.db).await?;

    let query = ApplicationListQuery {
        status: Some("all".to_string()),
        author_id: Some("U1".to_string()),
    };

    let result = list_applications(State(test.state()), Query(query)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    for row in rows {
        assert_eq!(row["authorId"], "U1");
    }

    Ok(())
}

/// Expected: a status filter narrows the list to matching applications only.
#[tokio::test]
async fn success_filters_by_status() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    factory::user("U1").insert(&test.db).await?;
    factory::grant("G1").insert(&test.db).await?;

    let mut submitted = factory::application("A1", "G1", "U1");
    submitted.status = ActiveValue::Set(entity::application::ApplicationStatus::Submitted);
    submitted.insert(&test.db).await?;

    factory::application("A2", "G1", "U1").insert(&test.db).await?;

    let query = ApplicationListQuery {
        status: Some("submitted".to_string()),
        author_id: None,
    };

    let result = list_applications(State(test.state()), Query(query)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "A1");
    assert_eq!(rows[0]["status"], "submitted");

    Ok(())
}

/// Expected: each row carries its opportunity, author, current version,
/// budgets, milestones, and clause associations.
#[tokio::test]
async fn success_includes_related_records() -> Result<(), TestError> {
    let test = test_setup_with_grant_tables!()?;

    factory::user("U1").insert(&test.db).await?;
    factory::grant("G1").insert(&test.db).await?;
    factory::application("A1", "G1", "U1").insert(&test.db).await?;
    factory::version("V1", "A1", "U1").insert(&test.db).await?;
    factory::budget("B1", "A1").insert(&test.db).await?;
    factory::milestone("M1", "A1").insert(&test.db).await?;
    factory::clause("C1").insert(&test.db).await?;
    factory::application_clause("AC1", "A1", "C1").insert(&test.db).await?;

    let result = list_applications(
        State(test.state()),
        Query(ApplicationListQuery::default()),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let row = &body.as_array().unwrap()[0];

    assert_eq!(row["opportunity"]["id"], "G1");
    assert_eq!(row["author"]["id"], "U1");
    assert_eq!(row["currentVersion"]["id"], "V1");
    assert_eq!(row["currentVersion"]["isCurrent"], true);
    assert_eq!(row["budgets"][0]["id"], "B1");
    assert_eq!(row["milestones"][0]["id"], "M1");
    assert_eq!(row["clauses"][0]["id"], "AC1");
    assert_eq!(row["clauses"][0]["clause"]["id"], "C1");

    Ok(())
}
