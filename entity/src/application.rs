use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Workflow status of a grant application, assigned by direct user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[sea_orm(string_value = "idea")]
    Idea,
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "internal_review")]
    InternalReview,
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "awarded")]
    Awarded,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "application")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub opportunity_id: String,
    pub title: String,
    pub status: ApplicationStatus,
    pub author_id: String,
    pub template_type: Option<String>,
    pub word_limit: Option<i32>,
    pub char_limit: Option<i32>,
    pub submission_date: Option<DateTime>,
    pub submission_method: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grant_opportunity::Entity",
        from = "Column::OpportunityId",
        to = "super::grant_opportunity::Column::Id"
    )]
    GrantOpportunity,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::application_version::Entity")]
    ApplicationVersion,
    #[sea_orm(has_many = "super::budget::Entity")]
    Budget,
    #[sea_orm(has_many = "super::milestone::Entity")]
    Milestone,
    #[sea_orm(has_many = "super::application_clause::Entity")]
    ApplicationClause,
}

impl Related<super::grant_opportunity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GrantOpportunity.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::application_version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationVersion.def()
    }
}

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budget.def()
    }
}

impl Related<super::milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestone.def()
    }
}

impl Related<super::application_clause::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationClause.def()
    }
}

impl Related<super::clause_library::Entity> for Entity {
    fn to() -> RelationDef {
        super::application_clause::Relation::ClauseLibrary.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::application_clause::Relation::Application.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
