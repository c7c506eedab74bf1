//! Database entity definitions for GrantDesk.
//!
//! One module per table, generated in the sea-orm entity format. The
//! [`prelude`] module re-exports every entity under its table name for
//! ergonomic use in queries and schema setup.

pub mod application;
pub mod application_clause;
pub mod application_version;
pub mod budget;
pub mod budget_line_item;
pub mod clause_library;
pub mod grant_opportunity;
pub mod milestone;
pub mod user;

pub mod prelude {
    pub use super::application::Entity as Application;
    pub use super::application_clause::Entity as ApplicationClause;
    pub use super::application_version::Entity as ApplicationVersion;
    pub use super::budget::Entity as Budget;
    pub use super::budget_line_item::Entity as BudgetLineItem;
    pub use super::clause_library::Entity as ClauseLibrary;
    pub use super::grant_opportunity::Entity as GrantOpportunity;
    pub use super::milestone::Entity as Milestone;
    pub use super::user::Entity as User;
}
