//! Budget list/create operations.

use sea_orm::DatabaseConnection;

use crate::{
    data::budget::{BudgetBundle, BudgetRepository, NewBudget, NewBudgetLineItem},
    error::{Error, Operation},
    model::budget::{BudgetDto, BudgetFilter, CreateBudgetDto, CreateBudgetLineItemDto},
    service::require,
    util,
};

static RESOURCE: &str = "budgets";

/// Service for listing and creating budgets with their line items.
pub struct BudgetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BudgetService<'a> {
    /// Creates a new instance of [`BudgetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists budgets matching the filter, fully projected.
    pub async fn list(&self, filter: &BudgetFilter) -> Result<Vec<BudgetDto>, Error> {
        let repository = BudgetRepository::new(self.db);

        let bundles = repository
            .list(filter)
            .await
            .map_err(Error::store(RESOURCE, Operation::Fetch))?;

        Ok(bundles.into_iter().map(project).collect())
    }

    /// Validates and creates a budget; nested line items are written in the
    /// same transaction.
    pub async fn create(&self, payload: CreateBudgetDto) -> Result<BudgetDto, Error> {
        let application_id = require("applicationId", payload.application_id)?;

        let new_budget = NewBudget {
            id: util::generate_id(),
            application_id,
            total_amount: payload.total_amount.unwrap_or(0.0),
            currency: payload.currency.unwrap_or_else(|| "USD".to_string()),
            match_required: payload.match_required.unwrap_or(false),
            match_amount: payload.match_amount.unwrap_or(0.0),
            in_kind_contribution: payload.in_kind_contribution.unwrap_or(0.0),
            notes: payload.notes,
        };

        let line_items = payload
            .line_items
            .unwrap_or_default()
            .into_iter()
            .map(new_line_item)
            .collect();

        let repository = BudgetRepository::new(self.db);

        let budget = repository
            .create(new_budget, line_items)
            .await
            .map_err(Error::store(RESOURCE, Operation::Create))?;

        let bundle = repository
            .get_by_id(&budget.id)
            .await
            .map_err(Error::store(RESOURCE, Operation::Create))?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find budget ID {} immediately after creating it",
                    budget.id
                ))
            })?;

        Ok(project(bundle))
    }
}

fn new_line_item(item: CreateBudgetLineItemDto) -> NewBudgetLineItem {
    NewBudgetLineItem {
        id: util::generate_id(),
        category: item.category.unwrap_or_default(),
        description: item.description.unwrap_or_default(),
        quantity: item.quantity.unwrap_or(1.0),
        unit: item.unit.unwrap_or_else(|| "each".to_string()),
        unit_cost: item.unit_cost.unwrap_or(0.0),
        total_cost: item.total_cost.unwrap_or(0.0),
        period: item.period,
        notes: item.notes,
    }
}

/// Projects a budget bundle into its wire shape. Pure and idempotent.
pub fn project(bundle: BudgetBundle) -> BudgetDto {
    let budget = bundle.budget;

    BudgetDto {
        id: budget.id,
        application_id: budget.application_id,
        total_amount: budget.total_amount,
        currency: budget.currency,
        match_required: budget.match_required,
        match_amount: budget.match_amount,
        in_kind_contribution: budget.in_kind_contribution,
        notes: budget.notes,
        created_at: budget.created_at,
        updated_at: budget.updated_at,
        line_items: bundle.line_items.into_iter().map(Into::into).collect(),
        application: bundle.application.map(Into::into),
    }
}
