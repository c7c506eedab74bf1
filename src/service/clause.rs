//! Clause library list/create operations.

use entity::clause_library::RiskRating;
use sea_orm::DatabaseConnection;

use crate::{
    data::clause::{ClauseRepository, NewClause},
    error::{Error, Operation},
    model::clause::{ClauseDto, ClauseFilter, CreateClauseDto},
    service::require,
    util,
};

static RESOURCE: &str = "clauses";

/// Service for listing and creating clause-library entries.
pub struct ClauseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClauseService<'a> {
    /// Creates a new instance of [`ClauseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists clause-library entries matching the filter, most recently
    /// updated first.
    pub async fn list(&self, filter: &ClauseFilter) -> Result<Vec<ClauseDto>, Error> {
        let repository = ClauseRepository::new(self.db);

        let clauses = repository
            .list(filter)
            .await
            .map_err(Error::store(RESOURCE, Operation::Fetch))?;

        Ok(clauses.into_iter().map(Into::into).collect())
    }

    /// Validates and creates a clause-library entry.
    pub async fn create(&self, payload: CreateClauseDto) -> Result<ClauseDto, Error> {
        let title = require("title", payload.title)?;
        let category = require("category", payload.category)?;
        let text = require("text", payload.text)?;

        let new_clause = NewClause {
            id: util::generate_id(),
            title,
            category,
            text,
            risk_rating: payload.risk_rating.unwrap_or(RiskRating::Medium),
            is_standard: payload.is_standard.unwrap_or(true),
            explanation: payload.explanation,
        };

        let clause = ClauseRepository::new(self.db)
            .create(new_clause)
            .await
            .map_err(Error::store(RESOURCE, Operation::Create))?;

        Ok(clause.into())
    }
}
