use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{data::contains_ci, model::grant::GrantFilter};

/// Field values for a new grant opportunity row.
pub struct NewGrant {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    pub sector: String,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub currency: String,
    pub deadline: NaiveDateTime,
    pub timezone: String,
    pub geography: Option<String>,
    pub eligibility: Option<String>,
    pub link: Option<String>,
    pub status: String,
    pub saved: bool,
    pub bookmarked: bool,
}

pub struct GrantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GrantRepository<'a> {
    /// Creates a new instance of [`GrantRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists grant opportunities matching the filter, soonest deadline
    /// first. Equal deadlines keep insertion order.
    pub async fn list(
        &self,
        filter: &GrantFilter,
    ) -> Result<Vec<entity::grant_opportunity::Model>, DbErr> {
        entity::prelude::GrantOpportunity::find()
            .filter(Self::condition(filter))
            .order_by_asc(entity::grant_opportunity::Column::Deadline)
            .order_by_asc(entity::grant_opportunity::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Creates a grant opportunity.
    pub async fn create(
        &self,
        new_grant: NewGrant,
    ) -> Result<entity::grant_opportunity::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let grant = entity::grant_opportunity::ActiveModel {
            id: ActiveValue::Set(new_grant.id),
            title: ActiveValue::Set(new_grant.title),
            organization: ActiveValue::Set(new_grant.organization),
            description: ActiveValue::Set(new_grant.description),
            sector: ActiveValue::Set(new_grant.sector),
            amount_min: ActiveValue::Set(new_grant.amount_min),
            amount_max: ActiveValue::Set(new_grant.amount_max),
            currency: ActiveValue::Set(new_grant.currency),
            deadline: ActiveValue::Set(new_grant.deadline),
            timezone: ActiveValue::Set(new_grant.timezone),
            geography: ActiveValue::Set(new_grant.geography),
            eligibility: ActiveValue::Set(new_grant.eligibility),
            link: ActiveValue::Set(new_grant.link),
            status: ActiveValue::Set(new_grant.status),
            saved: ActiveValue::Set(new_grant.saved),
            bookmarked: ActiveValue::Set(new_grant.bookmarked),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        grant.insert(self.db).await
    }

    fn condition(filter: &GrantFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(contains_ci(
                        entity::grant_opportunity::Column::Title,
                        search,
                    ))
                    .add(contains_ci(
                        entity::grant_opportunity::Column::Organization,
                        search,
                    ))
                    .add(contains_ci(
                        entity::grant_opportunity::Column::Description,
                        search,
                    )),
            );
        }

        if let Some(sector) = &filter.sector {
            condition =
                condition.add(entity::grant_opportunity::Column::Sector.eq(sector.as_str()));
        }

        if let Some(geography) = &filter.geography {
            condition =
                condition.add(entity::grant_opportunity::Column::Geography.eq(geography.as_str()));
        }

        if let Some(saved) = filter.saved {
            condition = condition.add(entity::grant_opportunity::Column::Saved.eq(saved));
        }

        if let Some(bookmarked) = filter.bookmarked {
            condition = condition.add(entity::grant_opportunity::Column::Bookmarked.eq(bookmarked));
        }

        if let Some(min_amount) = filter.min_amount {
            condition = condition.add(entity::grant_opportunity::Column::AmountMin.gte(min_amount));
        }

        if let Some(max_amount) = filter.max_amount {
            condition = condition.add(entity::grant_opportunity::Column::AmountMax.lte(max_amount));
        }

        condition
    }
}
