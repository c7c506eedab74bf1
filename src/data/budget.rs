use chrono::Utc;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, LoaderTrait, QueryFilter, TransactionTrait,
};

use crate::model::budget::BudgetFilter;

/// Field values for a new budget row.
pub struct NewBudget {
    pub id: String,
    pub application_id: String,
    pub total_amount: f64,
    pub currency: String,
    pub match_required: bool,
    pub match_amount: f64,
    pub in_kind_contribution: f64,
    pub notes: Option<String>,
}

/// Field values for a line item created alongside a budget.
pub struct NewBudgetLineItem {
    pub id: String,
    pub category: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub period: Option<String>,
    pub notes: Option<String>,
}

/// A budget row with its line items (insertion order) and parent
/// application.
#[derive(Clone)]
pub struct BudgetBundle {
    pub budget: entity::budget::Model,
    pub line_items: Vec<entity::budget_line_item::Model>,
    pub application: Option<entity::application::Model>,
}

pub struct BudgetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetRepository<'a> {
    /// Creates a new instance of [`BudgetRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists budgets matching the filter in insertion order, with line items
    /// and parent application attached.
    pub async fn list(&self, filter: &BudgetFilter) -> Result<Vec<BudgetBundle>, DbErr> {
        let budgets = entity::prelude::Budget::find()
            .filter(Self::condition(filter))
            .all(self.db)
            .await?;

        self.load_related(budgets).await
    }

    /// Gets a single budget with its related rows.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<BudgetBundle>, DbErr> {
        match entity::prelude::Budget::find_by_id(id).one(self.db).await? {
            Some(budget) => Ok(self.load_related(vec![budget]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Creates a budget and its nested line items in a single transaction.
    pub async fn create(
        &self,
        new_budget: NewBudget,
        line_items: Vec<NewBudgetLineItem>,
    ) -> Result<entity::budget::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let txn = self.db.begin().await?;

        let budget = entity::budget::ActiveModel {
            id: ActiveValue::Set(new_budget.id),
            application_id: ActiveValue::Set(new_budget.application_id),
            total_amount: ActiveValue::Set(new_budget.total_amount),
            currency: ActiveValue::Set(new_budget.currency),
            match_required: ActiveValue::Set(new_budget.match_required),
            match_amount: ActiveValue::Set(new_budget.match_amount),
            in_kind_contribution: ActiveValue::Set(new_budget.in_kind_contribution),
            notes: ActiveValue::Set(new_budget.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        for item in line_items {
            entity::budget_line_item::ActiveModel {
                id: ActiveValue::Set(item.id),
                budget_id: ActiveValue::Set(budget.id.clone()),
                category: ActiveValue::Set(item.category),
                description: ActiveValue::Set(item.description),
                quantity: ActiveValue::Set(item.quantity),
                unit: ActiveValue::Set(item.unit),
                unit_cost: ActiveValue::Set(item.unit_cost),
                total_cost: ActiveValue::Set(item.total_cost),
                period: ActiveValue::Set(item.period),
                notes: ActiveValue::Set(item.notes),
                created_at: ActiveValue::Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(budget)
    }

    fn condition(filter: &BudgetFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(application_id) = &filter.application_id {
            condition =
                condition.add(entity::budget::Column::ApplicationId.eq(application_id.as_str()));
        }

        condition
    }

    async fn load_related(
        &self,
        budgets: Vec<entity::budget::Model>,
    ) -> Result<Vec<BudgetBundle>, DbErr> {
        let line_items = budgets
            .load_many(entity::prelude::BudgetLineItem, self.db)
            .await?;
        let applications = budgets
            .load_one(entity::prelude::Application, self.db)
            .await?;

        let bundles = budgets
            .into_iter()
            .zip(line_items)
            .zip(applications)
            .map(|((budget, line_items), application)| BudgetBundle {
                budget,
                line_items,
                application,
            })
            .collect();

        Ok(bundles)
    }
}
