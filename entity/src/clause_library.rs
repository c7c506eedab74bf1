use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Legal risk rating assigned to a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum RiskRating {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
    #[sea_orm(string_value = "critical")]
    Critical,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "clause_library")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub risk_rating: RiskRating,
    pub is_standard: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application_clause::Entity")]
    ApplicationClause,
}

impl Related<super::application_clause::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApplicationClause.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        super::application_clause::Relation::Application.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::application_clause::Relation::ClauseLibrary
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
