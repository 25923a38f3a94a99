//! HTTP controller endpoints for the salary cap tracker API.
//!
//! Controllers extract path, query and body parameters, delegate to the services and return
//! JSON responses. Errors are returned as [`Error`](crate::server::error::Error) and rendered
//! as `{"detail": ...}` bodies. Every handler carries a utoipa annotation for the OpenAPI
//! document.

pub mod contract;
pub mod player;
pub mod salary_cap;
pub mod status;
pub mod team;
