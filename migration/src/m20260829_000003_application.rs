use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260829_000001_user::User, m20260829_000002_grant_opportunity::GrantOpportunity,
};

static FK_APPLICATION_OPPORTUNITY_ID: &str = "fk_application_opportunity_id";
static FK_APPLICATION_AUTHOR_ID: &str = "fk_application_author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(string(Application::Id).primary_key())
                    .col(string(Application::OpportunityId))
                    .col(string(Application::Title))
                    .col(string(Application::Status))
                    .col(string(Application::AuthorId))
                    .col(string_null(Application::TemplateType))
                    .col(integer_null(Application::WordLimit))
                    .col(integer_null(Application::CharLimit))
                    .col(timestamp_null(Application::SubmissionDate))
                    .col(string_null(Application::SubmissionMethod))
                    .col(timestamp(Application::CreatedAt))
                    .col(timestamp(Application::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_OPPORTUNITY_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::OpportunityId)
                    .to_tbl(GrantOpportunity::Table)
                    .to_col(GrantOpportunity::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_AUTHOR_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::AuthorId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_OPPORTUNITY_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_AUTHOR_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    OpportunityId,
    Title,
    Status,
    AuthorId,
    TemplateType,
    WordLimit,
    CharLimit,
    SubmissionDate,
    SubmissionMethod,
    CreatedAt,
    UpdatedAt,
}
