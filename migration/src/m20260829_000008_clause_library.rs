use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClauseLibrary::Table)
                    .if_not_exists()
                    .col(string(ClauseLibrary::Id).primary_key())
                    .col(string(ClauseLibrary::Title))
                    .col(string(ClauseLibrary::Category))
                    .col(text(ClauseLibrary::Text))
                    .col(string(ClauseLibrary::RiskRating))
                    .col(boolean(ClauseLibrary::IsStandard))
                    .col(text_null(ClauseLibrary::Explanation))
                    .col(timestamp(ClauseLibrary::CreatedAt))
                    .col(timestamp(ClauseLibrary::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClauseLibrary::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ClauseLibrary {
    Table,
    Id,
    Title,
    Category,
    Text,
    RiskRating,
    IsStandard,
    Explanation,
    CreatedAt,
    UpdatedAt,
}
