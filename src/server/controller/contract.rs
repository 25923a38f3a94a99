use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        contract::{ContractDto, ContractListParams, CreateContractDto},
    },
    server::{error::Error, model::app::AppState, service::contract::ContractService},
};

pub static CONTRACT_TAG: &str = "contracts";

/// List contracts with pagination and filters
#[utoipa::path(
    get,
    path = "/api/v1/contracts",
    tag = CONTRACT_TAG,
    params(ContractListParams),
    responses(
        (status = 200, description = "Page of contracts ordered by ID", body = Vec<ContractDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_contracts(
    State(state): State<AppState>,
    Query(params): Query<ContractListParams>,
) -> Result<impl IntoResponse, Error> {
    let contracts = ContractService::new(&state.db)
        .list_contracts(params)
        .await?;

    Ok((StatusCode::OK, Json(contracts)))
}

/// Register a new contract
#[utoipa::path(
    post,
    path = "/api/v1/contracts",
    tag = CONTRACT_TAG,
    request_body = CreateContractDto,
    responses(
        (status = 200, description = "Contract created", body = ContractDto),
        (status = 404, description = "Player or team not found", body = ErrorDto),
        (status = 422, description = "Invalid contract fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contract(
    State(state): State<AppState>,
    Json(contract): Json<CreateContractDto>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db)
        .create_contract(contract)
        .await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Get a contract by ID
#[utoipa::path(
    get,
    path = "/api/v1/contracts/{contract_id}",
    tag = CONTRACT_TAG,
    params(
        ("contract_id" = i32, Path, description = "Contract ID")
    ),
    responses(
        (status = 200, description = "Contract found", body = ContractDto),
        (status = 404, description = "Contract not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contract = ContractService::new(&state.db)
        .get_contract(contract_id)
        .await?;

    Ok((StatusCode::OK, Json(contract)))
}

/// Get all of a team's contracts for a year
#[utoipa::path(
    get,
    path = "/api/v1/contracts/team/{team_id}/year/{year}",
    tag = CONTRACT_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("year" = i32, Path, description = "Contract year")
    ),
    responses(
        (status = 200, description = "The team's contracts for the year", body = Vec<ContractDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_contracts_by_year(
    State(state): State<AppState>,
    Path((team_id, year)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let contracts = ContractService::new(&state.db)
        .get_team_contracts_by_year(team_id, year)
        .await?;

    Ok((StatusCode::OK, Json(contracts)))
}
