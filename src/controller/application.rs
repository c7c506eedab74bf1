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
        application::{ApplicationDto, ApplicationListQuery, CreateApplicationDto},
    },
    service::application::ApplicationService,
};

pub static APPLICATION_TAG: &str = "applications";

/// List applications, filterable by status and author
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    params(ApplicationListQuery),
    responses(
        (status = 200, description = "Success when retrieving applications", body = Vec<ApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications(
    State(state): State<AppState>,
    Query(query): Query<ApplicationListQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let applications = ApplicationService::new(&state.db)
        .list(&query.into())
        .await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Create an application, with an optional initial version
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Success when creating an application", body = ApplicationDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let application = ApplicationService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(application)))
}
