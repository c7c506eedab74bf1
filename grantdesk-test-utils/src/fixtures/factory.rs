//! Factory functions for seeding grant-management rows in tests.
//!
//! Each function returns a fully populated `ActiveModel` so a test can
//! override individual fields before inserting. Identifiers are passed in
//! explicitly so tests stay readable ("A1" belongs to "G1").

use chrono::{Duration, NaiveDate, NaiveDateTime};
use entity::{
    application, application_clause, application_version, budget, budget_line_item,
    clause_library, grant_opportunity, milestone, user,
    application::ApplicationStatus, clause_library::RiskRating,
};
use sea_orm::ActiveValue::Set;

/// Deterministic timestamp `days` days after the fixture epoch.
pub fn timestamp(days: i64) -> NaiveDateTime {
    let epoch = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    epoch + Duration::days(days)
}

pub fn user(id: &str) -> user::ActiveModel {
    user::ActiveModel {
        id: Set(id.to_string()),
        name: Set(format!("Test User {id}")),
        email: Set(format!("{}@example.org", id.to_lowercase())),
        created_at: Set(timestamp(0)),
    }
}

pub fn grant(id: &str) -> grant_opportunity::ActiveModel {
    grant_opportunity::ActiveModel {
        id: Set(id.to_string()),
        title: Set(format!("Grant Opportunity {id}")),
        organization: Set("Test Foundation".to_string()),
        description: Set("A test funding opportunity".to_string()),
        sector: Set("education".to_string()),
        amount_min: Set(Some(10_000.0)),
        amount_max: Set(Some(50_000.0)),
        currency: Set("USD".to_string()),
        deadline: Set(timestamp(30)),
        timezone: Set("UTC".to_string()),
        geography: Set(Some("national".to_string())),
        eligibility: Set(None),
        link: Set(None),
        status: Set("active".to_string()),
        saved: Set(false),
        bookmarked: Set(false),
        created_at: Set(timestamp(0)),
        updated_at: Set(timestamp(0)),
    }
}

pub fn application(id: &str, opportunity_id: &str, author_id: &str) -> application::ActiveModel {
    application::ActiveModel {
        id: Set(id.to_string()),
        opportunity_id: Set(opportunity_id.to_string()),
        title: Set(format!("Application {id}")),
        status: Set(ApplicationStatus::Idea),
        author_id: Set(author_id.to_string()),
        template_type: Set(None),
        word_limit: Set(None),
        char_limit: Set(None),
        submission_date: Set(None),
        submission_method: Set(None),
        created_at: Set(timestamp(0)),
        updated_at: Set(timestamp(0)),
    }
}

pub fn version(id: &str, application_id: &str, author_id: &str) -> application_version::ActiveModel {
    application_version::ActiveModel {
        id: Set(id.to_string()),
        application_id: Set(application_id.to_string()),
        version_number: Set(1),
        author_id: Set(author_id.to_string()),
        content: Set("Draft narrative".to_string()),
        word_count: Set(2),
        char_count: Set(15),
        notes: Set(None),
        is_current: Set(true),
        created_at: Set(timestamp(0)),
    }
}

pub fn budget(id: &str, application_id: &str) -> budget::ActiveModel {
    budget::ActiveModel {
        id: Set(id.to_string()),
        application_id: Set(application_id.to_string()),
        total_amount: Set(1_000.0),
        currency: Set("USD".to_string()),
        match_required: Set(false),
        match_amount: Set(0.0),
        in_kind_contribution: Set(0.0),
        notes: Set(None),
        created_at: Set(timestamp(0)),
        updated_at: Set(timestamp(0)),
    }
}

pub fn line_item(id: &str, budget_id: &str) -> budget_line_item::ActiveModel {
    budget_line_item::ActiveModel {
        id: Set(id.to_string()),
        budget_id: Set(budget_id.to_string()),
        category: Set("travel".to_string()),
        description: Set("Round-trip airfare".to_string()),
        quantity: Set(1.0),
        unit: Set("each".to_string()),
        unit_cost: Set(500.0),
        total_cost: Set(500.0),
        period: Set(None),
        notes: Set(None),
        created_at: Set(timestamp(0)),
    }
}

pub fn milestone(id: &str, application_id: &str) -> milestone::ActiveModel {
    milestone::ActiveModel {
        id: Set(id.to_string()),
        application_id: Set(application_id.to_string()),
        title: Set(format!("Milestone {id}")),
        description: Set(None),
        due_date: Set(None),
        status: Set("pending".to_string()),
        created_at: Set(timestamp(0)),
        updated_at: Set(timestamp(0)),
    }
}

pub fn clause(id: &str) -> clause_library::ActiveModel {
    clause_library::ActiveModel {
        id: Set(id.to_string()),
        title: Set(format!("Clause {id}")),
        category: Set("general".to_string()),
        text: Set("Standard contractual language".to_string()),
        risk_rating: Set(RiskRating::Medium),
        is_standard: Set(true),
        explanation: Set(None),
        created_at: Set(timestamp(0)),
        updated_at: Set(timestamp(0)),
    }
}

pub fn application_clause(
    id: &str,
    application_id: &str,
    clause_id: &str,
) -> application_clause::ActiveModel {
    application_clause::ActiveModel {
        id: Set(id.to_string()),
        application_id: Set(application_id.to_string()),
        clause_id: Set(clause_id.to_string()),
        created_at: Set(timestamp(0)),
    }
}
