use cap_tracker::{
    model::contract::{ContractDto, ContractListParams, CreateContractDto},
    server::controller::contract::{
        create_contract, get_contract, get_team_contracts_by_year, list_contracts,
    },
};

use super::*;

fn create_contract_dto(player_id: i32, team_id: i32) -> CreateContractDto {
    CreateContractDto {
        player_id,
        team_id,
        contract_year: 2024,
        total_value: 450_000_000.0,
        guaranteed_money: 141_481_905.0,
        signing_bonus: 10_000_000.0,
        cap_hit: 37_000_000.0,
        base_salary: 1_500_000.0,
        roster_bonus: 0.0,
        workout_bonus: 0.0,
        incentives: 0.0,
        dead_money: 0.0,
        contract_length: Some(10),
        contract_start_year: Some(2022),
        contract_end_year: Some(2031),
        is_franchise_tag: false,
        is_transition_tag: false,
        notes: Some("Extension".to_string()),
    }
}

/// Expect 200 with the stored contract
#[tokio::test]
async fn creates_contract() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_team("KC")
        .with_mock_player("Patrick Mahomes", "QB")
        .build()
        .await?;

    let result = create_contract(
        State(test.to_app_state::<AppState>()),
        Json(create_contract_dto(1, 1)),
    )
    .await;

    assert!(result.is_ok());
    let (status, contract): (_, ContractDto) =
        response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contract.cap_hit, 37_000_000.0);
    assert_eq!(contract.notes.as_deref(), Some("Extension"));

    Ok(())
}

/// Expect 404 when the referenced team does not exist
#[tokio::test]
async fn create_contract_fails_for_missing_team() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_player("Patrick Mahomes", "QB")
        .build()
        .await?;

    let result = create_contract(
        State(test.to_app_state::<AppState>()),
        Json(create_contract_dto(1, 1)),
    )
    .await;

    assert!(result.is_err());
    let (status, body): (_, ErrorDto) =
        response_json(result.err().unwrap().into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Team not found");

    Ok(())
}

/// Expect the list filters to combine
#[tokio::test]
async fn filters_contracts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_team("KC")
        .with_mock_team("BUF")
        .build()
        .await?;
    test.league()
        .insert_team_contracts(1, 2024, &[1_000_000.0, 2_000_000.0])
        .await?;
    test.league()
        .insert_team_contracts(1, 2025, &[3_000_000.0])
        .await?;
    test.league()
        .insert_team_contracts(2, 2024, &[4_000_000.0])
        .await?;

    let result = list_contracts(
        State(test.to_app_state::<AppState>()),
        Query(ContractListParams {
            team_id: Some(1),
            contract_year: Some(2024),
            ..Default::default()
        }),
    )
    .await;

    let (status, contracts): (_, Vec<ContractDto>) =
        response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contracts.len(), 2);
    assert!(contracts
        .iter()
        .all(|c| c.team_id == 1 && c.contract_year == 2024));

    Ok(())
}

/// Expect 404 with "Contract not found" for a missing ID
#[tokio::test]
async fn get_contract_fails_for_missing_contract() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let result = get_contract(State(test.to_app_state::<AppState>()), Path(8)).await;

    assert!(result.is_err());
    let (status, body): (_, ErrorDto) =
        response_json(result.err().unwrap().into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Contract not found");

    Ok(())
}

/// Expect only the team's contracts for the requested year
#[tokio::test]
async fn gets_team_contracts_by_year() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_team("KC")
        .build()
        .await?;
    test.league()
        .insert_team_contracts(1, 2024, &[1_000_000.0, 2_000_000.0, 3_000_000.0])
        .await?;
    test.league()
        .insert_team_contracts(1, 2023, &[9_000_000.0])
        .await?;

    let result =
        get_team_contracts_by_year(State(test.to_app_state::<AppState>()), Path((1, 2024))).await;

    let (status, contracts): (_, Vec<ContractDto>) =
        response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contracts.len(), 3);

    Ok(())
}
