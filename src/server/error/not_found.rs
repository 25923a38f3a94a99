use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::detail_response;

/// A record referenced by a request does not exist.
#[derive(Error, Debug, PartialEq)]
pub enum NotFoundError {
    #[error("Salary cap data not found for year {0}")]
    SalaryCap(i32),
    #[error("Team ID {0} not found")]
    Team(i32),
    #[error("Team with abbreviation {0:?} not found")]
    TeamAbbreviation(String),
    #[error("Player ID {0} not found")]
    Player(i32),
    #[error("Contract ID {0} not found")]
    Contract(i32),
}

impl NotFoundError {
    /// Message returned to API consumers
    pub fn detail(&self) -> &'static str {
        match self {
            Self::SalaryCap(_) => "Salary cap data not found for this year",
            Self::Team(_) | Self::TeamAbbreviation(_) => "Team not found",
            Self::Player(_) => "Player not found",
            Self::Contract(_) => "Contract not found",
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        detail_response(StatusCode::NOT_FOUND, self.detail())
    }
}
