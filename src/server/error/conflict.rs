use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::detail_response;

/// A create request collides with an existing unique record.
#[derive(Error, Debug, PartialEq)]
pub enum ConflictError {
    #[error("A team with abbreviation {0:?} already exists")]
    TeamAbbreviation(String),
    #[error("Salary cap data for year {0} already exists")]
    SalaryCapYear(i32),
}

impl IntoResponse for ConflictError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        detail_response(StatusCode::CONFLICT, self.to_string())
    }
}
