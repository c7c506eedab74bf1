//! Wire models: list-query DTOs, typed filters, create payloads, and
//! projected record DTOs for each resource.

pub mod api;
pub mod app;
pub mod application;
pub mod budget;
pub mod clause;
pub mod filter;
pub mod grant;
