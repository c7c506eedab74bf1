use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "grant_opportunity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub organization: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub sector: String,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub currency: String,
    pub deadline: DateTime,
    pub timezone: String,
    pub geography: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub eligibility: Option<String>,
    pub link: Option<String>,
    pub status: String,
    pub saved: bool,
    pub bookmarked: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
