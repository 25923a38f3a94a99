use cap_tracker::{
    model::salary_cap::{CreateSalaryCapDto, SalaryCapDto, TeamCapSummaryDto},
    server::controller::salary_cap::{
        create_salary_cap, get_salary_cap, get_team_cap_summary, list_salary_caps,
    },
};
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

use super::*;

/// Expect cap years ordered most recent first
#[tokio::test]
async fn lists_salary_caps_by_year_descending() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_salary_cap(2023, 224_800_000.0, 202_320_000.0)
        .with_salary_cap(2024, 255_400_000.0, 229_860_000.0)
        .with_salary_cap(2022, 208_200_000.0, 187_380_000.0)
        .build()
        .await?;

    let result = list_salary_caps(State(test.to_app_state::<AppState>())).await;

    let (status, caps): (_, Vec<SalaryCapDto>) =
        response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    let years: Vec<_> = caps.iter().map(|c| c.year).collect();
    assert_eq!(years, vec![2024, 2023, 2022]);

    Ok(())
}

/// Expect 200 on create and 409 for the same year
#[tokio::test]
async fn creates_salary_cap_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let salary_cap = CreateSalaryCapDto {
        year: 2025,
        salary_cap: 279_200_000.0,
        salary_floor: 251_280_000.0,
        luxury_tax_threshold: None,
        minimum_team_salary: None,
        notes: Some("Projected".to_string()),
    };

    let result = create_salary_cap(
        State(test.to_app_state::<AppState>()),
        Json(salary_cap.clone()),
    )
    .await;
    let (status, created): (_, SalaryCapDto) =
        response_json(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created.year, 2025);

    let result = create_salary_cap(State(test.to_app_state::<AppState>()), Json(salary_cap)).await;
    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::CONFLICT
    );

    Ok(())
}

/// Expect 404 with the salary cap message for a missing year
#[tokio::test]
async fn get_salary_cap_fails_for_missing_year() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;

    let result = get_salary_cap(State(test.to_app_state::<AppState>()), Path(2024)).await;

    let (status, body): (_, ErrorDto) =
        response_json(result.err().unwrap().into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.detail, "Salary cap data not found for this year");

    Ok(())
}

mod get_team_cap_summary {
    use super::*;

    /// Expect the summary fields for a team under the cap
    #[tokio::test]
    async fn summarizes_team_under_cap() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_team("KC")
            .with_salary_cap(2024, 255_400_000.0, 229_860_000.0)
            .build()
            .await?;
        test.league()
            .insert_team_contracts(1, 2024, &[10_000_000.0, 5_500_000.0, 2_300_000.0])
            .await?;

        let result =
            get_team_cap_summary(State(test.to_app_state::<AppState>()), Path((1, 2024))).await;

        assert!(result.is_ok());
        let (status, summary): (_, TeamCapSummaryDto) =
            response_json(result.unwrap().into_response()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary.team.id, 1);
        assert_eq!(summary.team.abbreviation, "KC");
        assert_eq!(summary.year, 2024);
        assert_eq!(summary.contract_count, 3);
        assert!((summary.total_cap_hit - 17_800_000.0).abs() < 1e-6);
        assert!((summary.remaining_cap - 237_600_000.0).abs() < 1e-6);
        assert!((summary.cap_percentage_used - 6.9694596).abs() < 1e-6);
        assert!(!summary.over_cap);

        Ok(())
    }

    /// Expect a negative remaining cap when over the ceiling
    #[tokio::test]
    async fn summarizes_team_over_cap() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_team("KC")
            .with_salary_cap(2024, 255_400_000.0, 229_860_000.0)
            .build()
            .await?;
        test.league()
            .insert_team_contracts(1, 2024, &[130_000_000.0, 130_000_000.0])
            .await?;

        let result =
            get_team_cap_summary(State(test.to_app_state::<AppState>()), Path((1, 2024))).await;

        let (_, summary): (_, TeamCapSummaryDto) =
            response_json(result.unwrap().into_response()).await;
        assert!((summary.remaining_cap + 4_600_000.0).abs() < 1e-6);
        assert!(summary.over_cap);

        Ok(())
    }

    /// Expect the missing year to be reported when both year and team are missing
    #[tokio::test]
    async fn reports_missing_year_before_missing_team() -> Result<(), TestError> {
        let test = TestBuilder::new().with_league_tables().build().await?;

        let result =
            get_team_cap_summary(State(test.to_app_state::<AppState>()), Path((1, 2024))).await;

        let (status, body): (_, ErrorDto) =
            response_json(result.err().unwrap().into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Salary cap data not found for this year");

        Ok(())
    }

    /// Expect "Team not found" when only the team is missing
    #[tokio::test]
    async fn fails_for_missing_team() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_salary_cap(2024, 255_400_000.0, 229_860_000.0)
            .build()
            .await?;

        let result =
            get_team_cap_summary(State(test.to_app_state::<AppState>()), Path((3, 2024))).await;

        let (status, body): (_, ErrorDto) =
            response_json(result.err().unwrap().into_response()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.detail, "Team not found");

        Ok(())
    }

    /// Expect 422 when the stored ceiling is zero
    #[tokio::test]
    async fn fails_for_zero_ceiling() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_team("KC")
            .build()
            .await?;
        let mut salary_cap = test
            .league()
            .insert_salary_cap(2024, 1.0, 0.0)
            .await?
            .into_active_model();
        salary_cap.salary_cap = ActiveValue::Set(0.0);
        salary_cap.update(&test.db).await?;

        let result =
            get_team_cap_summary(State(test.to_app_state::<AppState>()), Path((1, 2024))).await;

        assert!(result.is_err());
        assert_eq!(
            result.err().unwrap().into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        Ok(())
    }
}
