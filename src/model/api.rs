use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub detail: String,
}

/// Service name and version returned from the API root
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceInfoDto {
    pub message: String,
    pub version: String,
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    pub status: String,
}
