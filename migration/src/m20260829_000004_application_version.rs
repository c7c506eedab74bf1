use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000003_application::Application;

static FK_APPLICATION_VERSION_APPLICATION_ID: &str = "fk_application_version_application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationVersion::Table)
                    .if_not_exists()
                    .col(string(ApplicationVersion::Id).primary_key())
                    .col(string(ApplicationVersion::ApplicationId))
                    .col(integer(ApplicationVersion::VersionNumber))
                    .col(string(ApplicationVersion::AuthorId))
                    .col(text(ApplicationVersion::Content))
                    .col(integer(ApplicationVersion::WordCount))
                    .col(integer(ApplicationVersion::CharCount))
                    .col(string_null(ApplicationVersion::Notes))
                    .col(boolean(ApplicationVersion::IsCurrent))
                    .col(timestamp(ApplicationVersion::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_VERSION_APPLICATION_ID)
                    .from_tbl(ApplicationVersion::Table)
                    .from_col(ApplicationVersion::ApplicationId)
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
                    .name(FK_APPLICATION_VERSION_APPLICATION_ID)
                    .table(ApplicationVersion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApplicationVersion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ApplicationVersion {
    Table,
    Id,
    ApplicationId,
    VersionNumber,
    AuthorId,
    Content,
    WordCount,
    CharCount,
    Notes,
    IsCurrent,
    CreatedAt,
}
