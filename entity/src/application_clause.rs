use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Join entity associating applications with shared clause-library entries.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "application_clause")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub application_id: String,
    pub clause_id: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application::Entity",
        from = "Column::ApplicationId",
        to = "super::application::Column::Id"
    )]
    Application,
    #[sea_orm(
        belongs_to = "super::clause_library::Entity",
        from = "Column::ClauseId",
        to = "super::clause_library::Column::Id"
    )]
    ClauseLibrary,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl Related<super::clause_library::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClauseLibrary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
