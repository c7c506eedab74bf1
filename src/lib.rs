//! GrantDesk server core.
//!
//! A grant-management backend exposing list and create endpoints over four
//! resources: applications, budgets, clause-library entries, and grant
//! opportunities. Each resource follows the same shape: a typed filter built
//! from query parameters, a repository that queries and batch-loads related
//! rows, a service that validates, defaults, and projects records into wire
//! DTOs, and an axum controller that maps the result onto HTTP.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
