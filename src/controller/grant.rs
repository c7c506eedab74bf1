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
        grant::{CreateGrantDto, GrantListQuery, GrantOpportunityDto},
    },
    service::grant::GrantService,
};

pub static GRANT_TAG: &str = "grants";

/// List grant opportunities, searchable and filterable
#[utoipa::path(
    get,
    path = "/api/grants",
    tag = GRANT_TAG,
    params(GrantListQuery),
    responses(
        (status = 200, description = "Success when retrieving grant opportunities", body = Vec<GrantOpportunityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_grants(
    State(state): State<AppState>,
    Query(query): Query<GrantListQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let grants = GrantService::new(&state.db).list(&query.into()).await?;

    Ok((StatusCode::OK, Json(grants)))
}

/// Create a grant opportunity
#[utoipa::path(
    post,
    path = "/api/grants",
    tag = GRANT_TAG,
    request_body = CreateGrantDto,
    responses(
        (status = 201, description = "Success when creating a grant opportunity", body = GrantOpportunityDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_grant(
    State(state): State<AppState>,
    Json(payload): Json<CreateGrantDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let grant = GrantService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(grant)))
}
