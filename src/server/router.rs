//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so their methods merge into a single
/// route. The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Registered Endpoints
/// - `GET /`, `GET /health` - Service information and liveness
/// - `GET|POST /api/v1/teams`, `GET /api/v1/teams/{team_id}`,
///   `GET /api/v1/teams/abbreviation/{abbreviation}`
/// - `GET|POST /api/v1/players`, `GET /api/v1/players/{player_id}`,
///   `GET /api/v1/players/search/{name}`
/// - `GET|POST /api/v1/contracts`, `GET /api/v1/contracts/{contract_id}`,
///   `GET /api/v1/contracts/team/{team_id}/year/{year}`
/// - `GET|POST /api/v1/salary-cap`, `GET /api/v1/salary-cap/{year}`,
///   `GET /api/v1/salary-cap/team/{team_id}/year/{year}/summary`
///
/// # Returns
/// An Axum `Router<AppState>`; provide the state with `with_state` before serving.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "NFL Salary Cap Tracker",
            description = "Teams, players, contracts and salary cap usage"
        ),
        tags(
            (name = controller::status::STATUS_TAG, description = "Service status routes"),
            (name = controller::team::TEAM_TAG, description = "Team API routes"),
            (name = controller::player::PLAYER_TAG, description = "Player API routes"),
            (name = controller::contract::CONTRACT_TAG, description = "Contract API routes"),
            (name = controller::salary_cap::SALARY_CAP_TAG, description = "Salary cap API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::status::root))
        .routes(routes!(controller::status::health))
        .routes(routes!(
            controller::team::list_teams,
            controller::team::create_team
        ))
        .routes(routes!(controller::team::get_team))
        .routes(routes!(controller::team::get_team_by_abbreviation))
        .routes(routes!(
            controller::player::list_players,
            controller::player::create_player
        ))
        .routes(routes!(controller::player::get_player))
        .routes(routes!(controller::player::search_players))
        .routes(routes!(
            controller::contract::list_contracts,
            controller::contract::create_contract
        ))
        .routes(routes!(controller::contract::get_contract))
        .routes(routes!(controller::contract::get_team_contracts_by_year))
        .routes(routes!(
            controller::salary_cap::list_salary_caps,
            controller::salary_cap::create_salary_cap
        ))
        .routes(routes!(controller::salary_cap::get_salary_cap))
        .routes(routes!(controller::salary_cap::get_team_cap_summary))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
