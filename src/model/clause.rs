//! Clause library wire models.

use chrono::NaiveDateTime;
use entity::clause_library::RiskRating;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::filter;

/// Raw query parameters accepted by the clause list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ClauseListQuery {
    /// Case-insensitive substring match over title and text.
    pub search: Option<String>,
    /// Category exact match; `"all"` means no constraint.
    pub category: Option<String>,
    /// Risk rating exact match; `"all"` means no constraint.
    pub risk_rating: Option<String>,
    /// `"true"`/`"false"` to constrain the standard-clause flag.
    pub is_standard: Option<String>,
}

/// Typed filter for clause list queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClauseFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub risk_rating: Option<String>,
    pub is_standard: Option<bool>,
}

impl From<ClauseListQuery> for ClauseFilter {
    fn from(query: ClauseListQuery) -> Self {
        Self {
            search: filter::search(query.search),
            category: filter::exact(query.category),
            risk_rating: filter::exact(query.risk_rating),
            is_standard: filter::flag(query.is_standard),
        }
    }
}

/// Payload for creating a clause-library entry.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClauseDto {
    pub title: Option<String>,
    pub category: Option<String>,
    pub text: Option<String>,
    /// Defaults to medium.
    #[schema(value_type = Option<String>)]
    pub risk_rating: Option<RiskRating>,
    /// Defaults to `true`.
    pub is_standard: Option<bool>,
    pub explanation: Option<String>,
}

/// A clause-library record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClauseDto {
    pub id: String,
    pub title: String,
    pub category: String,
    pub text: String,
    #[schema(value_type = String)]
    pub risk_rating: RiskRating,
    pub is_standard: bool,
    pub explanation: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::clause_library::Model> for ClauseDto {
    fn from(model: entity::clause_library::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            category: model.category,
            text: model.text,
            risk_rating: model.risk_rating,
            is_standard: model.is_standard,
            explanation: model.explanation,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
