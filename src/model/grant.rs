//! Grant opportunity wire models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::filter;

/// Raw query parameters accepted by the grant opportunity list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GrantListQuery {
    /// Case-insensitive substring match over title, organization, and
    /// description.
    pub search: Option<String>,
    /// Sector exact match; `"all"` means no constraint.
    pub sector: Option<String>,
    /// Geography exact match; `"all"` means no constraint.
    pub geography: Option<String>,
    /// `"true"`/`"false"` to constrain the saved flag.
    pub saved: Option<String>,
    /// `"true"`/`"false"` to constrain the bookmarked flag.
    pub bookmarked: Option<String>,
    /// Keep grants whose minimum award is at least this value.
    pub min_amount: Option<String>,
    /// Keep grants whose maximum award is at most this value.
    pub max_amount: Option<String>,
}

/// Typed filter for grant opportunity list queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GrantFilter {
    pub search: Option<String>,
    pub sector: Option<String>,
    pub geography: Option<String>,
    pub saved: Option<bool>,
    pub bookmarked: Option<bool>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl From<GrantListQuery> for GrantFilter {
    fn from(query: GrantListQuery) -> Self {
        Self {
            search: filter::search(query.search),
            sector: filter::exact(query.sector),
            geography: filter::exact(query.geography),
            saved: filter::flag(query.saved),
            bookmarked: filter::flag(query.bookmarked),
            min_amount: filter::amount(query.min_amount),
            max_amount: filter::amount(query.max_amount),
        }
    }
}

/// Payload for creating a grant opportunity.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGrantDto {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub sector: Option<String>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    /// Defaults to `"USD"`.
    pub currency: Option<String>,
    /// ISO-8601-like date string; required.
    pub deadline: Option<String>,
    /// Defaults to `"UTC"`.
    pub timezone: Option<String>,
    pub geography: Option<String>,
    pub eligibility: Option<String>,
    pub link: Option<String>,
    /// Defaults to `"active"`.
    pub status: Option<String>,
    /// Defaults to `false`.
    pub saved: Option<bool>,
    /// Defaults to `false`.
    pub bookmarked: Option<bool>,
}

/// A grant opportunity record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrantOpportunityDto {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub sector: String,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub currency: String,
    pub deadline: NaiveDateTime,
    pub timezone: String,
    pub geography: Option<String>,
    pub eligibility: Option<String>,
    pub link: Option<String>,
    pub status: String,
    pub saved: bool,
    pub bookmarked: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::grant_opportunity::Model> for GrantOpportunityDto {
    fn from(model: entity::grant_opportunity::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            organization: model.organization,
            description: model.description,
            sector: model.sector,
            amount_min: model.amount_min,
            amount_max: model.amount_max,
            currency: model.currency,
            deadline: model.deadline,
            timezone: model.timezone,
            geography: model.geography,
            eligibility: model.eligibility,
            link: model.link,
            status: model.status,
            saved: model.saved,
            bookmarked: model.bookmarked,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
