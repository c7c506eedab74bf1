//! Application wire models: list query, typed filter, create payload, and
//! the projected record with its expansions (opportunity, author, current
//! version, budgets, milestones, clause associations).

use chrono::NaiveDateTime;
use entity::application::ApplicationStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{filter, grant::GrantOpportunityDto};

/// Raw query parameters accepted by the application list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ApplicationListQuery {
    /// Status exact match; `"all"` means no constraint.
    pub status: Option<String>,
    /// Author exact match; `"all"` means no constraint.
    pub author_id: Option<String>,
}

/// Typed filter for application list queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApplicationFilter {
    pub status: Option<String>,
    pub author_id: Option<String>,
}

impl From<ApplicationListQuery> for ApplicationFilter {
    fn from(query: ApplicationListQuery) -> Self {
        Self {
            status: filter::exact(query.status),
            author_id: filter::exact(query.author_id),
        }
    }
}

/// Payload for creating an application.
///
/// When `content` is supplied and nonempty, an initial version (number 1,
/// current) is created atomically with the application.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationDto {
    pub opportunity_id: Option<String>,
    pub title: Option<String>,
    /// Defaults to idea.
    #[schema(value_type = Option<String>)]
    pub status: Option<ApplicationStatus>,
    pub author_id: Option<String>,
    pub template_type: Option<String>,
    pub word_limit: Option<i32>,
    pub char_limit: Option<i32>,
    /// ISO-8601-like date string.
    pub submission_date: Option<String>,
    pub submission_method: Option<String>,
    /// Initial proposal content for version 1.
    pub content: Option<String>,
    /// Word count recorded on version 1; defaults to 0.
    pub word_count: Option<i32>,
    /// Character count recorded on version 1; defaults to 0.
    pub char_count: Option<i32>,
}

/// An application author as returned inside projected records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}

/// An application version snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationVersionDto {
    pub id: String,
    pub application_id: String,
    pub version_number: i32,
    pub author_id: String,
    pub content: String,
    pub word_count: i32,
    pub char_count: i32,
    pub notes: Option<String>,
    pub is_current: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::application_version::Model> for ApplicationVersionDto {
    fn from(model: entity::application_version::Model) -> Self {
        Self {
            id: model.id,
            application_id: model.application_id,
            version_number: model.version_number,
            author_id: model.author_id,
            content: model.content,
            word_count: model.word_count,
            char_count: model.char_count,
            notes: model.notes,
            is_current: model.is_current,
            created_at: model.created_at,
        }
    }
}

/// A milestone attached to an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDto {
    pub id: String,
    pub application_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::milestone::Model> for MilestoneDto {
    fn from(model: entity::milestone::Model) -> Self {
        Self {
            id: model.id,
            application_id: model.application_id,
            title: model.title,
            description: model.description,
            due_date: model.due_date,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// A clause association on an application, carrying the referenced
/// clause-library entry when it still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationClauseDto {
    pub id: String,
    pub application_id: String,
    pub clause_id: String,
    pub created_at: NaiveDateTime,
    pub clause: Option<crate::model::clause::ClauseDto>,
}

/// A projected application record: the base row plus its expansions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
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
    pub opportunity: Option<GrantOpportunityDto>,
    pub author: Option<UserDto>,
    pub current_version: Option<ApplicationVersionDto>,
    pub budgets: Vec<crate::model::budget::BudgetRecordDto>,
    pub milestones: Vec<MilestoneDto>,
    pub clauses: Vec<ApplicationClauseDto>,
}
