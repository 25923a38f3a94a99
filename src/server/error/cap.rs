use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::detail_response;

#[derive(Error, Debug, PartialEq)]
pub enum CapError {
    /// Cap usage is a ratio against the ceiling, which must be a positive finite amount.
    #[error("Salary cap ceiling for year {year} must be positive to compute cap usage, found {salary_cap}")]
    NonPositiveCeiling { year: i32, salary_cap: f64 },
}

impl IntoResponse for CapError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        detail_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Salary cap data for this year has no positive cap ceiling",
        )
    }
}
