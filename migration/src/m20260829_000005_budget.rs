use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_application::Application;

static FK_BUDGET_APPLICATION_ID: &str = "fk_budget_application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Budget::Table)
                    .if_not_exists()
                    .col(string(Budget::Id).primary_key())
                    .col(string(Budget::ApplicationId))
                    .col(double(Budget::TotalAmount))
                    .col(string(Budget::Currency))
                    .col(boolean(Budget::MatchRequired))
                    .col(double(Budget::MatchAmount))
                    .col(double(Budget::InKindContribution))
                    .col(string_null(Budget::Notes))
                    .col(timestamp(Budget::CreatedAt))
                    .col(timestamp(Budget::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUDGET_APPLICATION_ID)
                    .from_tbl(Budget::Table)
                    .from_col(Budget::ApplicationId)
                    .to_tbl(Application::Table)
                    .to_col(Application::Id)
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
                    .name(FK_BUDGET_APPLICATION_ID)
                    .table(Budget::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Budget::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Budget {
    Table,
    Id,
    ApplicationId,
    TotalAmount,
    Currency,
    MatchRequired,
    MatchAmount,
    InKindContribution,
    Notes,
    CreatedAt,
    UpdatedAt,
}
