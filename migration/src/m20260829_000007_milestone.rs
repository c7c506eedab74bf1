use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_application::Application;

static FK_MILESTONE_APPLICATION_ID: &str = "fk_milestone_application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Milestone::Table)
                    .if_not_exists()
                    .col(string(Milestone::Id).primary_key())
                    .col(string(Milestone::ApplicationId))
                    .col(string(Milestone::Title))
                    .col(text_null(Milestone::Description))
                    .col(timestamp_null(Milestone::DueDate))
                    .col(string(Milestone::Status))
                    .col(timestamp(Milestone::CreatedAt))
                    .col(timestamp(Milestone::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MILESTONE_APPLICATION_ID)
                    .from_tbl(Milestone::Table)
                    .from_col(Milestone::ApplicationId)
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
                    .name(FK_MILESTONE_APPLICATION_ID)
                    .table(Milestone::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Milestone::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Milestone {
    Table,
    Id,
    ApplicationId,
    Title,
    Description,
    DueDate,
    Status,
    CreatedAt,
    UpdatedAt,
}
