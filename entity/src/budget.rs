use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "budget")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub application_id: String,
    pub total_amount: f64,
    pub currency: String,
    pub match_required: bool,
    pub match_amount: f64,
    pub in_kind_contribution: f64,
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::application::Entity",
        from = "Column::ApplicationId",
        to = "super::application::Column::Id"
    )]
    Application,
    #[sea_orm(has_many = "super::budget_line_item::Entity")]
    BudgetLineItem,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl Related<super::budget_line_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetLineItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
