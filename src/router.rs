//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations, and
//! Swagger UI is served at `/api/docs` for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `GET  /api/applications` - List applications (status/author filters)
/// - `POST /api/applications` - Create an application
/// - `GET  /api/budgets` - List budgets (application filter)
/// - `POST /api/budgets` - Create a budget with line items
/// - `GET  /api/clauses` - List clause-library entries (search/filters)
/// - `POST /api/clauses` - Create a clause-library entry
/// - `GET  /api/grants` - List grant opportunities (search/filters)
/// - `POST /api/grants` - Create a grant opportunity
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "GrantDesk", description = "GrantDesk API"), tags(
        (name = controller::application::APPLICATION_TAG, description = "Grant application API routes"),
        (name = controller::budget::BUDGET_TAG, description = "Budget API routes"),
        (name = controller::clause::CLAUSE_TAG, description = "Clause library API routes"),
        (name = controller::grant::GRANT_TAG, description = "Grant opportunity API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::application::list_applications,
            controller::application::create_application
        ))
        .routes(routes!(
            controller::budget::list_budgets,
            controller::budget::create_budget
        ))
        .routes(routes!(
            controller::clause::list_clauses,
            controller::clause::create_clause
        ))
        .routes(routes!(
            controller::grant::list_grants,
            controller::grant::create_grant
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
