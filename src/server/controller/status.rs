use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{HealthDto, ServiceInfoDto};

pub static STATUS_TAG: &str = "status";

/// Service name and version
#[utoipa::path(
    get,
    path = "/",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service information", body = ServiceInfoDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfoDto {
            message: "NFL Salary Cap Tracker API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
        }),
    )
}
