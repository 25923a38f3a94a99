use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        salary_cap::{CreateSalaryCapDto, SalaryCapDto, TeamCapSummaryDto},
    },
    server::{error::Error, model::app::AppState, service::salary_cap::SalaryCapService},
};

pub static SALARY_CAP_TAG: &str = "salary-cap";

/// List salary cap figures for all years, most recent first
#[utoipa::path(
    get,
    path = "/api/v1/salary-cap",
    tag = SALARY_CAP_TAG,
    responses(
        (status = 200, description = "Cap figures ordered by year descending", body = Vec<SalaryCapDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_salary_caps(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let salary_caps = SalaryCapService::new(&state.db).list_salary_caps().await?;

    Ok((StatusCode::OK, Json(salary_caps)))
}

/// Record salary cap figures for a new year
#[utoipa::path(
    post,
    path = "/api/v1/salary-cap",
    tag = SALARY_CAP_TAG,
    request_body = CreateSalaryCapDto,
    responses(
        (status = 200, description = "Cap figures created", body = SalaryCapDto),
        (status = 409, description = "Cap figures for the year already exist", body = ErrorDto),
        (status = 422, description = "Invalid cap figures", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_salary_cap(
    State(state): State<AppState>,
    Json(salary_cap): Json<CreateSalaryCapDto>,
) -> Result<impl IntoResponse, Error> {
    let salary_cap = SalaryCapService::new(&state.db)
        .create_salary_cap(salary_cap)
        .await?;

    Ok((StatusCode::OK, Json(salary_cap)))
}

/// Get salary cap figures for a year
#[utoipa::path(
    get,
    path = "/api/v1/salary-cap/{year}",
    tag = SALARY_CAP_TAG,
    params(
        ("year" = i32, Path, description = "League year")
    ),
    responses(
        (status = 200, description = "Cap figures found", body = SalaryCapDto),
        (status = 404, description = "Salary cap data not found for this year", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_salary_cap(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let salary_cap = SalaryCapService::new(&state.db).get_salary_cap(year).await?;

    Ok((StatusCode::OK, Json(salary_cap)))
}

/// Get a team's cap summary for a year
///
/// Totals the cap hits of the team's contracts for the year against the league cap figures.
#[utoipa::path(
    get,
    path = "/api/v1/salary-cap/team/{team_id}/year/{year}/summary",
    tag = SALARY_CAP_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("year" = i32, Path, description = "League year")
    ),
    responses(
        (status = 200, description = "Cap summary", body = TeamCapSummaryDto),
        (status = 404, description = "Salary cap year or team not found", body = ErrorDto),
        (status = 422, description = "Stored cap ceiling is not positive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_cap_summary(
    State(state): State<AppState>,
    Path((team_id, year)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let summary = SalaryCapService::new(&state.db)
        .get_team_cap_summary(team_id, year)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}
