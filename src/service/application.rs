//! Application list/create operations.

use entity::application::ApplicationStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::application::{
        ApplicationBundle, ApplicationRepository, NewApplication, NewApplicationVersion,
    },
    error::{Error, Operation},
    model::application::{
        ApplicationClauseDto, ApplicationDto, ApplicationFilter, CreateApplicationDto,
    },
    service::require,
    util,
};

static RESOURCE: &str = "applications";

/// Service for listing and creating grant applications.
pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists applications matching the filter, fully projected, most
    /// recently updated first.
    pub async fn list(&self, filter: &ApplicationFilter) -> Result<Vec<ApplicationDto>, Error> {
        let repository = ApplicationRepository::new(self.db);

        let bundles = repository
            .list(filter)
            .await
            .map_err(Error::store(RESOURCE, Operation::Fetch))?;

        Ok(bundles.into_iter().map(project).collect())
    }

    /// Validates and creates an application.
    ///
    /// When the payload carries nonempty `content`, version 1 is created in
    /// the same transaction; the two rows appear together or not at all.
    pub async fn create(&self, payload: CreateApplicationDto) -> Result<ApplicationDto, Error> {
        let opportunity_id = require("opportunityId", payload.opportunity_id)?;
        let title = require("title", payload.title)?;
        let author_id = require("authorId", payload.author_id)?;

        let submission_date = payload
            .submission_date
            .as_deref()
            .map(|value| util::parse_datetime("submissionDate", value))
            .transpose()?;

        let new_application = NewApplication {
            id: util::generate_id(),
            opportunity_id,
            title,
            status: payload.status.unwrap_or(ApplicationStatus::Idea),
            author_id: author_id.clone(),
            template_type: payload.template_type,
            word_limit: payload.word_limit,
            char_limit: payload.char_limit,
            submission_date,
            submission_method: payload.submission_method,
        };

        let initial_version = payload
            .content
            .filter(|content| !content.is_empty())
            .map(|content| NewApplicationVersion {
                id: util::generate_id(),
                author_id,
                content,
                word_count: payload.word_count.unwrap_or(0),
                char_count: payload.char_count.unwrap_or(0),
            });

        let repository = ApplicationRepository::new(self.db);

        let application = repository
            .create(new_application, initial_version)
            .await
            .map_err(Error::store(RESOURCE, Operation::Create))?;

        let bundle = repository
            .get_by_id(&application.id)
            .await
            .map_err(Error::store(RESOURCE, Operation::Create))?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find application ID {} immediately after creating it",
                    application.id
                ))
            })?;

        Ok(project(bundle))
    }
}

/// Projects an application bundle into its wire shape. Pure and idempotent:
/// the same bundle always yields a structurally equal DTO.
pub fn project(bundle: ApplicationBundle) -> ApplicationDto {
    let application = bundle.application;

    ApplicationDto {
        id: application.id,
        opportunity_id: application.opportunity_id,
        title: application.title,
        status: application.status,
        author_id: application.author_id,
        template_type: application.template_type,
        word_limit: application.word_limit,
        char_limit: application.char_limit,
        submission_date: application.submission_date,
        submission_method: application.submission_method,
        created_at: application.created_at,
        updated_at: application.updated_at,
        opportunity: bundle.opportunity.map(Into::into),
        author: bundle.author.map(Into::into),
        current_version: bundle.current_version.map(Into::into),
        budgets: bundle.budgets.into_iter().map(Into::into).collect(),
        milestones: bundle.milestones.into_iter().map(Into::into).collect(),
        clauses: bundle
            .clauses
            .into_iter()
            .map(|(link, clause)| ApplicationClauseDto {
                id: link.id,
                application_id: link.application_id,
                clause_id: link.clause_id,
                created_at: link.created_at,
                clause: clause.map(Into::into),
            })
            .collect(),
    }
}
