//! Budget wire models.

use chrono::NaiveDateTime;
use entity::application::ApplicationStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::filter;

/// Raw query parameters accepted by the budget list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BudgetListQuery {
    /// Parent application exact match; `"all"` means no constraint.
    pub application_id: Option<String>,
}

/// Typed filter for budget list queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BudgetFilter {
    pub application_id: Option<String>,
}

impl From<BudgetListQuery> for BudgetFilter {
    fn from(query: BudgetListQuery) -> Self {
        Self {
            application_id: filter::exact(query.application_id),
        }
    }
}

/// A nested line item supplied when creating a budget.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetLineItemDto {
    pub category: Option<String>,
    pub description: Option<String>,
    /// Defaults to 1.
    pub quantity: Option<f64>,
    /// Defaults to `"each"`.
    pub unit: Option<String>,
    /// Defaults to 0.
    pub unit_cost: Option<f64>,
    /// Defaults to 0.
    pub total_cost: Option<f64>,
    pub period: Option<String>,
    pub notes: Option<String>,
}

/// Payload for creating a budget together with its line items.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetDto {
    pub application_id: Option<String>,
    /// Defaults to 0.
    pub total_amount: Option<f64>,
    /// Defaults to `"USD"`.
    pub currency: Option<String>,
    /// Defaults to `false`.
    pub match_required: Option<bool>,
    /// Defaults to 0.
    pub match_amount: Option<f64>,
    /// Defaults to 0.
    pub in_kind_contribution: Option<f64>,
    pub notes: Option<String>,
    /// Created atomically with the budget; defaults to empty.
    pub line_items: Option<Vec<CreateBudgetLineItemDto>>,
}

/// A budget line item as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLineItemDto {
    pub id: String,
    pub budget_id: String,
    pub category: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub period: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::budget_line_item::Model> for BudgetLineItemDto {
    fn from(model: entity::budget_line_item::Model) -> Self {
        Self {
            id: model.id,
            budget_id: model.budget_id,
            category: model.category,
            description: model.description,
            quantity: model.quantity,
            unit: model.unit,
            unit_cost: model.unit_cost,
            total_cost: model.total_cost,
            period: model.period,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}

/// A flat budget record, nested inside projected applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecordDto {
    pub id: String,
    pub application_id: String,
    pub total_amount: f64,
    pub currency: String,
    pub match_required: bool,
    pub match_amount: f64,
    pub in_kind_contribution: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::budget::Model> for BudgetRecordDto {
    fn from(model: entity::budget::Model) -> Self {
        Self {
            id: model.id,
            application_id: model.application_id,
            total_amount: model.total_amount,
            currency: model.currency,
            match_required: model.match_required,
            match_amount: model.match_amount,
            in_kind_contribution: model.in_kind_contribution,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// A flat application record, nested inside projected budgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecordDto {
    pub id: String,
    pub opportunity_id: String,
    pub title: String,
    #[schema(value_type = String)]
    pub status: ApplicationStatus,
    pub author_id: String,
    pub template_type: Option<String>,
    pub word_limit: Option<i32>,
    pub char_limit: Option<i32>,
    pub submission_date: Option<NaiveDateTime>,
    pub submission_method: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::application::Model> for ApplicationRecordDto {
    fn from(model: entity::application::Model) -> Self {
        Self {
            id: model.id,
            opportunity_id: model.opportunity_id,
            title: model.title,
            status: model.status,
            author_id: model.author_id,
            template_type: model.template_type,
            word_limit: model.word_limit,
            char_limit: model.char_limit,
            submission_date: model.submission_date,
            submission_method: model.submission_method,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// A projected budget record: the base row, its line items in insertion
/// order, and its parent application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BudgetDto {
    pub id: String,
    pub application_id: String,
    pub total_amount: f64,
    pub currency: String,
    pub match_required: bool,
    pub match_amount: f64,
    pub in_kind_contribution: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub line_items: Vec<BudgetLineItemDto>,
    pub application: Option<ApplicationRecordDto>,
}
