//! HTTP controllers: one module per resource, each exposing a list and a
//! create handler.

pub mod application;
pub mod budget;
pub mod clause;
pub mod grant;
