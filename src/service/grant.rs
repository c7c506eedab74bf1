//! Grant opportunity list/create operations.

use sea_orm::DatabaseConnection;

use crate::{
    data::grant::{GrantRepository, NewGrant},
    error::{Error, Operation},
    model::grant::{CreateGrantDto, GrantFilter, GrantOpportunityDto},
    service::require,
    util,
};

static RESOURCE: &str = "grants";

/// Service for listing and creating grant opportunities.
pub struct GrantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GrantService<'a> {
    /// Creates a new instance of [`GrantService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists grant opportunities matching the filter, soonest deadline
    /// first.
    pub async fn list(&self, filter: &GrantFilter) -> Result<Vec<GrantOpportunityDto>, Error> {
        let repository = GrantRepository::new(self.db);

        let grants = repository
            .list(filter)
            .await
            .map_err(Error::store(RESOURCE, Operation::Fetch))?;

        Ok(grants.into_iter().map(Into::into).collect())
    }

    /// Validates and creates a grant opportunity.
    pub async fn create(&self, payload: CreateGrantDto) -> Result<GrantOpportunityDto, Error> {
        let title = require("title", payload.title)?;
        let organization = require("organization", payload.organization)?;
        let description = require("description", payload.description)?;
        let sector = require("sector", payload.sector)?;
        let deadline = require("deadline", payload.deadline)?;
        let deadline = util::parse_datetime("deadline", &deadline)?;

        let new_grant = NewGrant {
            id: util::generate_id(),
            title,
            organization,
            description,
            sector,
            amount_min: payload.amount_min,
            amount_max: payload.amount_max,
            currency: payload.currency.unwrap_or_else(|| "USD".to_string()),
            deadline,
            timezone: payload.timezone.unwrap_or_else(|| "UTC".to_string()),
            geography: payload.geography,
            eligibility: payload.eligibility,
            link: payload.link,
            status: payload.status.unwrap_or_else(|| "active".to_string()),
            saved: payload.saved.unwrap_or(false),
            bookmarked: payload.bookmarked.unwrap_or(false),
        };

        let grant = GrantRepository::new(self.db)
            .create(new_grant)
            .await
            .map_err(Error::store(RESOURCE, Operation::Create))?;

        Ok(grant.into())
    }
}
