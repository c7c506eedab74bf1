use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Immutable content snapshot of an application. At most one version per
/// application carries `is_current = true`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "application_version")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub application_id: String,
    pub version_number: i32,
    pub author_id: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub word_count: i32,
    pub char_count: i32,
    pub notes: Option<String>,
    pub is_current: bool,
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
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
