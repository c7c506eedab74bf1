use chrono::Utc;
use entity::clause_library::RiskRating;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{data::contains_ci, model::clause::ClauseFilter};

/// Field values for a new clause-library row.
pub struct NewClause {
    pub id: String,
    pub title: String,
    pub category: String,
    pub text: String,
    pub risk_rating: RiskRating,
    pub is_standard: bool,
    pub explanation: Option<String>,
}

pub struct ClauseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClauseRepository<'a> {
    /// Creates a new instance of [`ClauseRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists clause-library entries matching the filter, most recently
    /// updated first.
    pub async fn list(
        &self,
        filter: &ClauseFilter,
    ) -> Result<Vec<entity::clause_library::Model>, DbErr> {
        entity::prelude::ClauseLibrary::find()
            .filter(Self::condition(filter))
            .order_by_desc(entity::clause_library::Column::UpdatedAt)
            .all(self.db)
            .await
    }

    /// Creates a clause-library entry.
    pub async fn create(
        &self,
        new_clause: NewClause,
    ) -> Result<entity::clause_library::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let clause = entity::clause_library::ActiveModel {
            id: ActiveValue::Set(new_clause.id),
            title: ActiveValue::Set(new_clause.title),
            category: ActiveValue::Set(new_clause.category),
            text: ActiveValue::Set(new_clause.text),
            risk_rating: ActiveValue::Set(new_clause.risk_rating),
            is_standard: ActiveValue::Set(new_clause.is_standard),
            explanation: ActiveValue::Set(new_clause.explanation),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        clause.insert(self.db).await
    }

    fn condition(filter: &ClauseFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(contains_ci(entity::clause_library::Column::Title, search))
                    .add(contains_ci(entity::clause_library::Column::Text, search)),
            );
        }

        if let Some(category) = &filter.category {
            condition =
                condition.add(entity::clause_library::Column::Category.eq(category.as_str()));
        }

        if let Some(risk_rating) = &filter.risk_rating {
            condition =
                condition.add(entity::clause_library::Column::RiskRating.eq(risk_rating.as_str()));
        }

        if let Some(is_standard) = filter.is_standard {
            condition = condition.add(entity::clause_library::Column::IsStandard.eq(is_standard));
        }

        condition
    }
}

#[cfg(test)]
mod tests {
    use grantdesk_test_utils::prelude::*;
    use sea_orm::{ActiveModelTrait, ActiveValue};

    use super::*;

    /// Expect a case-mixed search term to match against either title or
    /// clause text, case-insensitively.
    #[tokio::test]
    async fn test_search_is_case_insensitive_across_fields() -> Result<(), TestError> {
        let test = test_setup_with_grant_tables!()?;
        let db = &test.db;

        let mut indemnification = factory::clause("C1");
        indemnification.title = ActiveValue::Set("Indemnification Clause".to_string());
        indemnification.text = ActiveValue::Set("The recipient shall hold harmless".to_string());
        indemnification.insert(db).await?;

        let mut termination = factory::clause("C2");
        termination.title = ActiveValue::Set("Termination".to_string());
        termination.text =
            ActiveValue::Set("Either party may terminate with notice".to_string());
        termination.insert(db).await?;

        let repository = ClauseRepository::new(db);

        let by_title = repository
            .list(&ClauseFilter {
                search: Some("iNDemnIF".to_string()),
                ..Default::default()
            })
            .await?;
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "C1");

        let by_text = repository
            .list(&ClauseFilter {
                search: Some("HOLD HARMLESS".to_string()),
                ..Default::default()
            })
            .await?;
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].id, "C1");

        Ok(())
    }

    /// Expect category, risk rating, and standard-flag filters to combine
    /// conjunctively.
    #[tokio::test]
    async fn test_filters_combine_conjunctively() -> Result<(), TestError> {
        let test = test_setup_with_grant_tables!()?;
        let db = &test.db;

        let mut liability = factory::clause("C1");
        liability.category = ActiveValue::Set("liability".to_string());
        liability.risk_rating = ActiveValue::Set(RiskRating::High);
        liability.is_standard = ActiveValue::Set(false);
        liability.insert(db).await?;

        let mut reporting = factory::clause("C2");
        reporting.category = ActiveValue::Set("liability".to_string());
        reporting.insert(db).await?;

        let repository = ClauseRepository::new(db);

        let filtered = repository
            .list(&ClauseFilter {
                category: Some("liability".to_string()),
                risk_rating: Some("high".to_string()),
                is_standard: Some(false),
                ..Default::default()
            })
            .await?;

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "C1");

        Ok(())
    }

    /// Expect most recently updated clauses first.
    #[tokio::test]
    async fn test_list_orders_by_updated_at_descending() -> Result<(), TestError> {
        let test = test_setup_with_grant_tables!()?;
        let db = &test.db;

        let mut old = factory::clause("C1");
        old.updated_at = ActiveValue::Set(factory::timestamp(1));
        old.insert(db).await?;

        let mut new = factory::clause("C2");
        new.updated_at = ActiveValue::Set(factory::timestamp(9));
        new.insert(db).await?;

        let repository = ClauseRepository::new(db);
        let clauses = repository.list(&ClauseFilter::default()).await?;

        let ids: Vec<&str> = clauses.iter().map(|clause| clause.id.as_str()).collect();
        assert_eq!(ids, vec!["C2", "C1"]);

        Ok(())
    }
}
