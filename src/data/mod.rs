//! Repository layer: one repository per resource, holding a borrowed
//! database connection and translating typed filters into queries.

pub mod application;
pub mod budget;
pub mod clause;
pub mod grant;

use sea_orm::sea_query::{Expr, ExprTrait, Func, IntoColumnRef, SimpleExpr};

/// Case-insensitive substring match: `lower(col) LIKE '%needle%'` with the
/// needle lowercased. Behaves identically on SQLite and Postgres.
pub(crate) fn contains_ci<C: IntoColumnRef>(col: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", needle.to_lowercase());

    Expr::expr(Func::lower(Expr::col(col))).like(pattern)
}
