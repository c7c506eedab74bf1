use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GrantOpportunity::Table)
                    .if_not_exists()
                    .col(string(GrantOpportunity::Id).primary_key())
                    .col(string(GrantOpportunity::Title))
                    .col(string(GrantOpportunity::Organization))
                    .col(text(GrantOpportunity::Description))
                    .col(string(GrantOpportunity::Sector))
                    .col(double_null(GrantOpportunity::AmountMin))
                    .col(double_null(GrantOpportunity::AmountMax))
                    .col(string(GrantOpportunity::Currency))
                    .col(timestamp(GrantOpportunity::Deadline))
                    .col(string(GrantOpportunity::Timezone))
                    .col(string_null(GrantOpportunity::Geography))
                    .col(text_null(GrantOpportunity::Eligibility))
                    .col(string_null(GrantOpportunity::Link))
                    .col(string(GrantOpportunity::Status))
                    .col(boolean(GrantOpportunity::Saved))
                    .col(boolean(GrantOpportunity::Bookmarked))
                    .col(timestamp(GrantOpportunity::CreatedAt))
                    .col(timestamp(GrantOpportunity::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GrantOpportunity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GrantOpportunity {
    Table,
    Id,
    Title,
    Organization,
    Description,
    Sector,
    AmountMin,
    AmountMax,
    Currency,
    Deadline,
    Timezone,
    Geography,
    Eligibility,
    Link,
    Status,
    Saved,
    Bookmarked,
    CreatedAt,
    UpdatedAt,
}
