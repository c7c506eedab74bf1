use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000005_budget::Budget;

static FK_BUDGET_LINE_ITEM_BUDGET_ID: &str = "fk_budget_line_item_budget_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BudgetLineItem::Table)
                    .if_not_exists()
                    .col(string(BudgetLineItem::Id).primary_key())
                    .col(string(BudgetLineItem::BudgetId))
                    .col(string(BudgetLineItem::Category))
                    .col(string(BudgetLineItem::Description))
                    .col(double(BudgetLineItem::Quantity))
                    .col(string(BudgetLineItem::Unit))
                    .col(double(BudgetLineItem::UnitCost))
                    .col(double(BudgetLineItem::TotalCost))
                    .col(string_null(BudgetLineItem::Period))
                    .col(string_null(BudgetLineItem::Notes))
                    .col(timestamp(BudgetLineItem::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUDGET_LINE_ITEM_BUDGET_ID)
                    .from_tbl(BudgetLineItem::Table)
                    .from_col(BudgetLineItem::BudgetId)
                    .to_tbl(Budget::Table)
                    .to_col(Budget::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUDGET_LINE_ITEM_BUDGET_ID)
                    .table(BudgetLineItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BudgetLineItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BudgetLineItem {
    Table,
    Id,
    BudgetId,
    Category,
    Description,
    Quantity,
    Unit,
    UnitCost,
    TotalCost,
    Period,
    Notes,
    CreatedAt,
}
