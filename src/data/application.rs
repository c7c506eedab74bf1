use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use entity::application::ApplicationStatus;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, LoaderTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::application::ApplicationFilter;

/// Field values for a new application row. Identity and defaults are
/// resolved by the service layer before reaching the repository.
pub struct NewApplication {
    pub id: String,
    pub opportunity_id: String,
    pub title: String,
    pub status: ApplicationStatus,
    pub author_id: String,
    pub template_type: Option<String>,
    pub word_limit: Option<i32>,
    pub char_limit: Option<i32>,
    pub submission_date: Option<NaiveDateTime>,
    pub submission_method: Option<String>,
}

/// Field values for the initial version created alongside an application.
pub struct NewApplicationVersion {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub word_count: i32,
    pub char_count: i32,
}

/// An application row together with every related row its projection needs.
#[derive(Clone)]
pub struct ApplicationBundle {
    pub application: entity::application::Model,
    pub opportunity: Option<entity::grant_opportunity::Model>,
    pub author: Option<entity::user::Model>,
    pub current_version: Option<entity::application_version::Model>,
    pub budgets: Vec<entity::budget::Model>,
    pub milestones: Vec<entity::milestone::Model>,
    pub clauses: Vec<(
        entity::application_clause::Model,
        Option<entity::clause_library::Model>,
    )>,
}

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists applications matching the filter, most recently updated first,
    /// with all related rows attached.
    pub async fn list(&self, filter: &ApplicationFilter) -> Result<Vec<ApplicationBundle>, DbErr> {
        let applications = entity::prelude::Application::find()
            .filter(Self::condition(filter))
            .order_by_desc(entity::application::Column::UpdatedAt)
            .all(self.db)
            .await?;

        self.load_related(applications).await
    }

    /// Gets a single application with its related rows.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<ApplicationBundle>, DbErr> {
        match entity::prelude::Application::find_by_id(id).one(self.db).await? {
            Some(application) => Ok(self.load_related(vec![application]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Creates an application, together with its initial version when one is
    /// supplied. Both rows are written in a single transaction.
    pub async fn create(
        &self,
        new_application: NewApplication,
        initial_version: Option<NewApplicationVersion>,
    ) -> Result<entity::application::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let txn = self.db.begin().await?;

        let application = entity::application::ActiveModel {
            id: ActiveValue::Set(new_application.id),
            opportunity_id: ActiveValue::Set(new_application.opportunity_id),
            title: ActiveValue::Set(new_application.title),
            status: ActiveValue::Set(new_application.status),
            author_id: ActiveValue::Set(new_application.author_id),
            template_type: ActiveValue::Set(new_application.template_type),
            word_limit: ActiveValue::Set(new_application.word_limit),
            char_limit: ActiveValue::Set(new_application.char_limit),
            submission_date: ActiveValue::Set(new_application.submission_date),
            submission_method: ActiveValue::Set(new_application.submission_method),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        if let Some(version) = initial_version {
            entity::application_version::ActiveModel {
                id: ActiveValue::Set(version.id),
                application_id: ActiveValue::Set(application.id.clone()),
                version_number: ActiveValue::Set(1),
                author_id: ActiveValue::Set(version.author_id),
                content: ActiveValue::Set(version.content),
                word_count: ActiveValue::Set(version.word_count),
                char_count: ActiveValue::Set(version.char_count),
                notes: ActiveValue::Set(Some("Initial version".to_string())),
                is_current: ActiveValue::Set(true),
                created_at: ActiveValue::Set(now),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(application)
    }

    fn condition(filter: &ApplicationFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(status) = &filter.status {
            condition = condition.add(entity::application::Column::Status.eq(status.as_str()));
        }

        if let Some(author_id) = &filter.author_id {
            condition = condition.add(entity::application::Column::AuthorId.eq(author_id.as_str()));
        }

        condition
    }

    /// Batch-loads every relation the projection needs, one query per
    /// relation regardless of how many applications were matched.
    async fn load_related(
        &self,
        applications: Vec<entity::application::Model>,
    ) -> Result<Vec<ApplicationBundle>, DbErr> {
        let opportunities = applications
            .load_one(entity::prelude::GrantOpportunity, self.db)
            .await?;
        let authors = applications.load_one(entity::prelude::User, self.db).await?;
        let current_versions = applications
            .load_many(
                entity::prelude::ApplicationVersion::find()
                    .filter(entity::application_version::Column::IsCurrent.eq(true)),
                self.db,
            )
            .await?;
        let budgets = applications
            .load_many(entity::prelude::Budget, self.db)
            .await?;
        let milestones = applications
            .load_many(entity::prelude::Milestone, self.db)
            .await?;
        let clause_links = applications
            .load_many(entity::prelude::ApplicationClause, self.db)
            .await?;

        let clause_ids: Vec<String> = clause_links
            .iter()
            .flatten()
            .map(|link| link.clause_id.clone())
            .collect();
        let clauses: HashMap<String, entity::clause_library::Model> =
            entity::prelude::ClauseLibrary::find()
                .filter(entity::clause_library::Column::Id.is_in(clause_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|clause| (clause.id.clone(), clause))
                .collect();

        let bundles = applications
            .into_iter()
            .zip(opportunities)
            .zip(authors)
            .zip(current_versions)
            .zip(budgets)
            .zip(milestones)
            .zip(clause_links)
            .map(
                |((((((application, opportunity), author), versions), budgets), milestones), links)| {
                    ApplicationBundle {
                        application,
                        opportunity,
                        author,
                        current_version: versions.into_iter().next(),
                        budgets,
                        milestones,
                        clauses: links
                            .into_iter()
                            .map(|link| {
                                let clause = clauses.get(&link.clause_id).cloned();
                                (link, clause)
                            })
                            .collect(),
                    }
                },
            )
            .collect();

        Ok(bundles)
    }
}
