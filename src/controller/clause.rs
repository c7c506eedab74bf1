use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        clause::{ClauseDto, ClauseListQuery, CreateClauseDto},
    },
    service::clause::ClauseService,
};

pub static CLAUSE_TAG: &str = "clauses";

/// List clause-library entries, searchable and filterable
#[utoipa::path(
    get,
    path = "/api/clauses",
    tag = CLAUSE_TAG,
    params(ClauseListQuery),
    responses(
        (status = 200, description = "Success when retrieving clauses", body = Vec<ClauseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_clauses(
    State(state): State<AppState>,
    Query(query): Query<ClauseListQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let clauses = ClauseService::new(&state.db).list(&query.into()).await?;

    Ok((StatusCode::OK, Json(clauses)))
}

/// Create a clause-library entry
#[utoipa::path(
    post,
    path = "/api/clauses",
    tag = CLAUSE_TAG,
    request_body = CreateClauseDto,
    responses(
        (status = 201, description = "Success when creating a clause", body = ClauseDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_clause(
    State(state): State<AppState>,
    Json(payload): Json<CreateClauseDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let clause = ClauseService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(clause)))
}
