use cap_tracker::{
    model::team::{CreateTeamDto, TeamDto},
    server::controller::team::{create_team, get_team, get_team_by_abbreviation, list_teams},
};

use super::*;

fn create_team_dto(abbreviation: &str) -> CreateTeamDto {
    CreateTeamDto {
        name: "Bills".to_string(),
        abbreviation: abbreviation.to_string(),
        city: "Buffalo".to_string(),
        conference: "AFC".to_string(),
        division: "East".to_string(),
        primary_color: Some("#00338D".to_string()),
        secondary_color: Some("#C60C30".to_string()),
    }
}

/// Expect 200 with teams ordered by ID
#[tokio::test]
async fn lists_teams() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_team("KC")
        .with_mock_team("BUF")
        .build()
        .await?;

    let result = list_teams(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let (status, teams): (_, Vec<TeamDto>) = response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    let abbreviations: Vec<_> = teams.iter().map(|t| t.abbreviation.as_str()).collect();
    assert_eq!(abbreviations, vec!["KC", "BUF"]);

    Ok(())
}

/// Expect 200 with the stored team, then 409 for the same abbreviation
#[tokio::test]
async fn creates_team_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let result = create_team(
        State(test.to_app_state::<AppState>()),
        Json(create_team_dto("buf")),
    )
    .await;

    assert!(result.is_ok());
    let (status, team): (_, TeamDto) = response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(team.abbreviation, "BUF");

    let result = create_team(
        State(test.to_app_state::<AppState>()),
        Json(create_team_dto("BUF")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 422 for a malformed team color
#[tokio::test]
async fn rejects_invalid_color() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let mut team = create_team_dto("BUF");
    team.primary_color = Some("blue".to_string());
    let result = create_team(State(test.to_app_state::<AppState>()), Json(team)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 404 with "Team not found" for a missing ID
#[tokio::test]
async fn get_team_fails_for_missing_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let result = get_team(State(test.to_app_state::<AppState>()), Path(12)).await;

    assert!(result.is_err());
    let (status, body): (_, ErrorDto) =
        response_json(result.err().unwrap().into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Team not found");

    Ok(())
}

/// Expect 200 for a lowercase abbreviation lookup
#[tokio::test]
async fn gets_team_by_lowercase_abbreviation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_team("SF")
        .build()
        .await?;

    let result = get_team_by_abbreviation(
        State(test.to_app_state::<AppState>()),
        Path("sf".to_string()),
    )
    .await;

    assert!(result.is_ok());
    let (status, team): (_, TeamDto) = response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(team.abbreviation, "SF");

    Ok(())
}
