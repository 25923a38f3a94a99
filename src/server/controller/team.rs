use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        team::{CreateTeamDto, TeamDto},
    },
    server::{error::Error, model::app::AppState, service::team::TeamService},
};

pub static TEAM_TAG: &str = "teams";

/// List all teams
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams ordered by ID", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_teams(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let teams = TeamService::new(&state.db).list_teams().await?;

    Ok((StatusCode::OK, Json(teams)))
}

/// Register a new team
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 200, description = "Team created", body = TeamDto),
        (status = 409, description = "Abbreviation already in use", body = ErrorDto),
        (status = 422, description = "Invalid team fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(team): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db).create_team(team).await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Get a team by ID
#[utoipa::path(
    get,
    path = "/api/v1/teams/{team_id}",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db).get_team(team_id).await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Get a team by abbreviation, case-insensitive
#[utoipa::path(
    get,
    path = "/api/v1/teams/abbreviation/{abbreviation}",
    tag = TEAM_TAG,
    params(
        ("abbreviation" = String, Path, description = "Team abbreviation, e.g. KC")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_by_abbreviation(
    State(state): State<AppState>,
    Path(abbreviation): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db)
        .get_team_by_abbreviation(&abbreviation)
        .await?;

    Ok((StatusCode::OK, Json(team)))
}
