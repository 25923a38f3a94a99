use sea_orm::DatabaseConnection;

use crate::{
    model::team::{CreateTeamDto, TeamDto},
    server::{
        data::team::TeamRepository,
        error::{conflict::ConflictError, not_found::NotFoundError, Error},
        service::validation,
    },
};

/// Column widths of the `teams` table
const NAME_MAX_LEN: usize = 100;
const ABBREVIATION_MAX_LEN: usize = 5;
const CITY_MAX_LEN: usize = 50;
const DIVISION_MAX_LEN: usize = 10;

/// Service for listing, looking up and registering teams.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_teams(&self) -> Result<Vec<TeamDto>, Error> {
        let teams = TeamRepository::new(self.db).get_all().await?;

        Ok(teams.into_iter().map(TeamDto::from).collect())
    }

    /// # Returns
    /// - `Ok(TeamDto)` - Team found
    /// - `Err(Error::NotFoundError)` - No team with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_team(&self, team_id: i32) -> Result<TeamDto, Error> {
        TeamRepository::new(self.db)
            .get_by_id(team_id)
            .await?
            .map(TeamDto::from)
            .ok_or_else(|| NotFoundError::Team(team_id).into())
    }

    /// Looks up a team by abbreviation, ignoring case.
    pub async fn get_team_by_abbreviation(&self, abbreviation: &str) -> Result<TeamDto, Error> {
        let abbreviation = abbreviation.trim().to_uppercase();

        TeamRepository::new(self.db)
            .get_by_abbreviation(&abbreviation)
            .await?
            .map(TeamDto::from)
            .ok_or_else(|| NotFoundError::TeamAbbreviation(abbreviation).into())
    }

    /// Validates and stores a new team.
    ///
    /// The abbreviation and conference are stored upper-case.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The stored team
    /// - `Err(Error::ValidationError)` - Blank or overlong field, unknown conference or
    ///   malformed color
    /// - `Err(Error::ConflictError)` - Abbreviation already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_team(&self, team: CreateTeamDto) -> Result<TeamDto, Error> {
        let team = CreateTeamDto {
            name: validation::required_text("name", team.name, NAME_MAX_LEN)?,
            abbreviation: validation::required_text(
                "abbreviation",
                team.abbreviation.to_uppercase(),
                ABBREVIATION_MAX_LEN,
            )?,
            city: validation::required_text("city", team.city, CITY_MAX_LEN)?,
            conference: validation::conference(team.conference)?,
            division: validation::required_text("division", team.division, DIVISION_MAX_LEN)?,
            primary_color: validation::optional_color("primary_color", team.primary_color)?,
            secondary_color: validation::optional_color("secondary_color", team.secondary_color)?,
        };

        let team_repo = TeamRepository::new(self.db);

        if team_repo
            .get_by_abbreviation(&team.abbreviation)
            .await?
            .is_some()
        {
            return Err(ConflictError::TeamAbbreviation(team.abbreviation).into());
        }

        let created = team_repo.create(team).await?;

        Ok(TeamDto::from(created))
    }
}
