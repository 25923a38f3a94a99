use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::{CreatePlayerDto, PlayerDto, PlayerListParams},
    },
    server::{error::Error, model::app::AppState, service::player::PlayerService},
};

pub static PLAYER_TAG: &str = "players";

/// List players with pagination and filters
#[utoipa::path(
    get,
    path = "/api/v1/players",
    tag = PLAYER_TAG,
    params(PlayerListParams),
    responses(
        (status = 200, description = "Page of players ordered by ID", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<PlayerListParams>,
) -> Result<impl IntoResponse, Error> {
    let players = PlayerService::new(&state.db).list_players(params).await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Register a new player
#[utoipa::path(
    post,
    path = "/api/v1/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 200, description = "Player created", body = PlayerDto),
        (status = 422, description = "Invalid player fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    Json(player): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, Error> {
    let player = PlayerService::new(&state.db).create_player(player).await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Get a player by ID
#[utoipa::path(
    get,
    path = "/api/v1/players/{player_id}",
    tag = PLAYER_TAG,
    params(
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player found", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let player = PlayerService::new(&state.db).get_player(player_id).await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Search players by name
#[utoipa::path(
    get,
    path = "/api/v1/players/search/{name}",
    tag = PLAYER_TAG,
    params(
        ("name" = String, Path, description = "Case-insensitive part of the player's name")
    ),
    responses(
        (status = 200, description = "Up to 20 matching players", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_players(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let players = PlayerService::new(&state.db).search_players(&name).await?;

    Ok((StatusCode::OK, Json(players)))
}
