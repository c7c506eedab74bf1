use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260829_000003_application::Application, m20260829_000008_clause_library::ClauseLibrary,
};

static FK_APPLICATION_CLAUSE_APPLICATION_ID: &str = "fk_application_clause_application_id";
static FK_APPLICATION_CLAUSE_CLAUSE_ID: &str = "fk_application_clause_clause_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationClause::Table)
                    .if_not_exists()
                    .col(string(ApplicationClause::Id).primary_key())
                    .col(string(ApplicationClause::ApplicationId))
                    .col(string(ApplicationClause::ClauseId))
                    .col(timestamp(ApplicationClause::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_CLAUSE_APPLICATION_ID)
                    .from_tbl(ApplicationClause::Table)
                    .from_col(ApplicationClause::ApplicationId)
                    .to_tbl(Application::Table)
                    .to_col(Application::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_CLAUSE_CLAUSE_ID)
                    .from_tbl(ApplicationClause::Table)
                    .from_col(ApplicationClause::ClauseId)
                    .to_tbl(ClauseLibrary::Table)
                    .to_col(ClauseLibrary::Id)
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
                    .name(FK_APPLICATION_CLAUSE_APPLICATION_ID)
                    .table(ApplicationClause::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_CLAUSE_CLAUSE_ID)
                    .table(ApplicationClause::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApplicationClause::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ApplicationClause {
    Table,
    Id,
    ApplicationId,
    ClauseId,
    CreatedAt,
}
