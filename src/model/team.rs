use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    /// Team abbreviation, e.g. `KC` or `NE`
    pub abbreviation: String,
    pub city: String,
    /// `AFC` or `NFC`
    pub conference: String,
    /// `North`, `South`, `East` or `West`
    pub division: String,
    /// Primary color hex code
    pub primary_color: Option<String>,
    /// Secondary color hex code
    pub secondary_color: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub abbreviation: String,
    pub city: String,
    pub conference: String,
    pub division: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

impl From<entity::team::Model> for TeamDto {
    fn from(team: entity::team::Model) -> Self {
        Self {
            id: team.id,
            name: team.name,
            abbreviation: team.abbreviation,
            city: team.city,
            conference: team.conference,
            division: team.division,
            primary_color: team.primary_color,
            secondary_color: team.secondary_color,
        }
    }
}
