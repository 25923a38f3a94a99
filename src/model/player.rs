use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub jersey_number: Option<i32>,
    pub height_inches: Option<i32>,
    pub weight_lbs: Option<i32>,
    pub birth_date: Option<NaiveDate>,
    pub college: Option<String>,
    pub draft_year: Option<i32>,
    pub draft_round: Option<i32>,
    pub draft_pick: Option<i32>,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlayerDto {
    pub name: String,
    pub position: String,
    pub jersey_number: Option<i32>,
    pub height_inches: Option<i32>,
    pub weight_lbs: Option<i32>,
    pub birth_date: Option<NaiveDate>,
    pub college: Option<String>,
    pub draft_year: Option<i32>,
    pub draft_round: Option<i32>,
    pub draft_pick: Option<i32>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

/// Query parameters for listing players
#[derive(Clone, Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerListParams {
    /// Number of players to skip
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of players to return
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Filter by position
    pub position: Option<String>,
    /// Show only active players
    #[serde(default = "default_is_active")]
    pub active_only: bool,
}

impl Default for PlayerListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            position: None,
            active_only: true,
        }
    }
}

fn default_is_active() -> bool {
    true
}

fn default_limit() -> u64 {
    100
}

impl From<entity::player::Model> for PlayerDto {
    fn from(player: entity::player::Model) -> Self {
        Self {
            id: player.id,
            name: player.name,
            position: player.position,
            jersey_number: player.jersey_number,
            height_inches: player.height_inches,
            weight_lbs: player.weight_lbs,
            birth_date: player.birth_date,
            college: player.college,
            draft_year: player.draft_year,
            draft_round: player.draft_round,
            draft_pick: player.draft_pick,
            is_active: player.is_active,
        }
    }
}
