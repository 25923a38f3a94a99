use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::detail_response;

/// A create request was well formed but its values are not acceptable.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be blank")]
    BlankField(&'static str),
    #[error("{field} must be at most {max_len} characters")]
    TooLong { field: &'static str, max_len: usize },
    #[error("conference must be AFC or NFC, got {0:?}")]
    InvalidConference(String),
    #[error("{field} must be a hex color such as #E31837, got {value:?}")]
    InvalidColor { field: &'static str, value: String },
    #[error("{0} must be a finite, non-negative amount")]
    InvalidAmount(&'static str),
    #[error("salary_cap must be greater than zero")]
    NonPositiveSalaryCap,
    #[error("salary_floor must not exceed salary_cap")]
    FloorAboveCap,
    #[error("contract_start_year must not be after contract_end_year")]
    StartAfterEnd,
    #[error("{0} must not exceed {max}", max = i64::MAX)]
    PageOutOfRange(&'static str),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        detail_response(StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
    }
}
