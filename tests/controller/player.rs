use cap_tracker::{
    model::player::{CreatePlayerDto, PlayerDto, PlayerListParams},
    server::controller::player::{create_player, get_player, list_players, search_players},
};
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

use super::*;

/// Expect inactive players to be listed only when active_only is false
#[tokio::test]
async fn lists_inactive_players_on_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_player("Active Starter", "QB")
        .build()
        .await?;
    let mut retired = test
        .league()
        .insert_mock_player("Retired Veteran", "QB")
        .await?
        .into_active_model();
    retired.is_active = ActiveValue::Set(false);
    retired.update(&test.db).await?;

    let result = list_players(
        State(test.to_app_state::<AppState>()),
        Query(PlayerListParams::default()),
    )
    .await;
    let (_, active): (_, Vec<PlayerDto>) = response_json(result.unwrap().into_response()).await;
    assert_eq!(active.len(), 1);

    let result = list_players(
        State(test.to_app_state::<AppState>()),
        Query(PlayerListParams {
            active_only: false,
            ..Default::default()
        }),
    )
    .await;
    let (_, all): (_, Vec<PlayerDto>) = response_json(result.unwrap().into_response()).await;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Expect skip and limit to page through players ordered by ID
#[tokio::test]
async fn pages_players() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_player("First", "CB")
        .with_mock_player("Second", "CB")
        .with_mock_player("Third", "CB")
        .build()
        .await?;

    let result = list_players(
        State(test.to_app_state::<AppState>()),
        Query(PlayerListParams {
            skip: 1,
            limit: 1,
            ..Default::default()
        }),
    )
    .await;

    let (status, players): (_, Vec<PlayerDto>) =
        response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Second");

    Ok(())
}

/// Expect 200 with the stored player
#[tokio::test]
async fn creates_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let player = CreatePlayerDto {
        name: "Patrick Mahomes".to_string(),
        position: "qb".to_string(),
        jersey_number: Some(15),
        height_inches: Some(74),
        weight_lbs: Some(225),
        birth_date: chrono::NaiveDate::from_ymd_opt(1995, 9, 17),
        college: Some("Texas Tech".to_string()),
        draft_year: Some(2017),
        draft_round: Some(1),
        draft_pick: Some(10),
        is_active: true,
    };
    let result = create_player(State(test.to_app_state::<AppState>()), Json(player)).await;

    assert!(result.is_ok());
    let (status, player): (_, PlayerDto) = response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(player.position, "QB");
    assert_eq!(player.draft_pick, Some(10));

    Ok(())
}

/// Expect 404 with "Player not found" for a missing ID
#[tokio::test]
async fn get_player_fails_for_missing_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let result = get_player(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    let (status, body): (_, ErrorDto) =
        response_json(result.err().unwrap().into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Player not found");

    Ok(())
}

/// Expect case-insensitive substring matches
#[tokio::test]
async fn searches_players_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_player("Travis Kelce", "TE")
        .with_mock_player("Jason Kelce", "C")
        .with_mock_player("Josh Allen", "QB")
        .build()
        .await?;

    let result = search_players(
        State(test.to_app_state::<AppState>()),
        Path("KELCE".to_string()),
    )
    .await;

    let (status, players): (_, Vec<PlayerDto>) =
        response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.name.ends_with("Kelce")));

    Ok(())
}
