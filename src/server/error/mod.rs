//! Error types for the salary cap tracker server.
//!
//! This module provides the error handling system with specialized error types for each
//! failure domain (configuration, missing records, cap computation, request validation and
//! uniqueness conflicts). All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for `Display` and `Error` implementations.

pub mod cap;
pub mod config;
pub mod conflict;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        cap::CapError, config::ConfigError, conflict::ConflictError, not_found::NotFoundError,
        validation::ValidationError,
    },
};

/// Main error type for the salary cap tracker server.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type so handlers and services can use `?` throughout. The `IntoResponse` implementation
/// maps each variant to an HTTP status code and a `{"detail": ...}` JSON body.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Missing records (salary cap year, team, player, contract)
/// - Cap computation errors (unusable stored cap ceiling)
/// - Validation errors on create requests
/// - Uniqueness conflicts on create requests
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A referenced record does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Stored cap data cannot be used to compute a summary.
    #[error(transparent)]
    CapError(#[from] CapError),
    /// A create request failed semantic validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A create request collides with an existing unique record.
    #[error(transparent)]
    ConflictError(#[from] ConflictError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For missing salary cap years, teams, players or contracts
/// - 409 Conflict - For duplicate team abbreviations or salary cap years
/// - 422 Unprocessable Entity - For validation failures and unusable cap data
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::CapError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ConflictError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status code and detail message.
pub(crate) fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        detail_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
