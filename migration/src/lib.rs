pub use sea_orm_migration::prelude::*;

mod m20260829_000001_user;
mod m20260829_000002_grant_opportunity;
mod m20260829_000003_application;
mod m20260829_000004_application_version;
mod m20260829_000005_budget;
mod m20260829_000006_budget_line_item;
mod m20260829_000007_milestone;
mod m20260829_000008_clause_library;
mod m20260829_000009_application_clause;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_user::Migration),
            Box::new(m20260829_000002_grant_opportunity::Migration),
            Box::new(m20260829_000003_application::Migration),
            Box::new(m20260829_000004_application_version::Migration),
            Box::new(m20260829_000005_budget::Migration),
            Box::new(m20260829_000006_budget_line_item::Migration),
            Box::new(m20260829_000007_milestone::Migration),
            Box::new(m20260829_000008_clause_library::Migration),
            Box::new(m20260829_000009_application_clause::Migration),
        ]
    }
}
