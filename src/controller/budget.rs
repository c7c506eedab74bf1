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
        budget::{BudgetDto, BudgetListQuery, CreateBudgetDto},
    },
    service::budget::BudgetService,
};

pub static BUDGET_TAG: &str = "budgets";

/// List budgets, filterable by parent application
#[utoipa::path(
    get,
    path = "/api/budgets",
    tag = BUDGET_TAG,
    params(BudgetListQuery),
    responses(
        (status = 200, description = "Success when retrieving budgets", body = Vec<BudgetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_budgets(
    State(state): State<AppState>,
    Query(query): Query<BudgetListQuery>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let budgets = BudgetService::new(&state.db).list(&query.into()).await?;

    Ok((StatusCode::OK, Json(budgets)))
}

/// Create a budget together with its line items
#[utoipa::path(
    post,
    path = "/api/budgets",
    tag = BUDGET_TAG,
    request_body = CreateBudgetDto,
    responses(
        (status = 201, description = "Success when creating a budget", body = BudgetDto),
        (status = 400, description = "Missing or malformed field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_budget(
    State(state): State<AppState>,
    Json(payload): Json<CreateBudgetDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let budget = BudgetService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(budget)))
}
