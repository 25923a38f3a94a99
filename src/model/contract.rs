use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContractDto {
    pub id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub contract_year: i32,
    pub total_value: f64,
    pub guaranteed_money: f64,
    pub signing_bonus: f64,
    /// Amount counted against the team's cap for `contract_year`
    pub cap_hit: f64,
    pub base_salary: f64,
    pub roster_bonus: f64,
    pub workout_bonus: f64,
    pub incentives: f64,
    /// Dead money if released
    pub dead_money: f64,
    pub contract_length: Option<i32>,
    pub contract_start_year: Option<i32>,
    pub contract_end_year: Option<i32>,
    pub is_franchise_tag: bool,
    pub is_transition_tag: bool,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateContractDto {
    pub player_id: i32,
    pub team_id: i32,
    pub contract_year: i32,
    pub total_value: f64,
    #[serde(default)]
    pub guaranteed_money: f64,
    #[serde(default)]
    pub signing_bonus: f64,
    pub cap_hit: f64,
    pub base_salary: f64,
    #[serde(default)]
    pub roster_bonus: f64,
    #[serde(default)]
    pub workout_bonus: f64,
    #[serde(default)]
    pub incentives: f64,
    #[serde(default)]
    pub dead_money: f64,
    pub contract_length: Option<i32>,
    pub contract_start_year: Option<i32>,
    pub contract_end_year: Option<i32>,
    #[serde(default)]
    pub is_franchise_tag: bool,
    #[serde(default)]
    pub is_transition_tag: bool,
    pub notes: Option<String>,
}

/// Query parameters for listing contracts
#[derive(Clone, Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContractListParams {
    /// Number of contracts to skip
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of contracts to return
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Filter by team
    pub team_id: Option<i32>,
    /// Filter by player
    pub player_id: Option<i32>,
    /// Filter by contract year
    pub contract_year: Option<i32>,
}

impl Default for ContractListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            team_id: None,
            player_id: None,
            contract_year: None,
        }
    }
}

fn default_limit() -> u64 {
    100
}

impl From<entity::contract::Model> for ContractDto {
    fn from(contract: entity::contract::Model) -> Self {
        Self {
            id: contract.id,
            player_id: contract.player_id,
            team_id: contract.team_id,
            contract_year: contract.contract_year,
            total_value: contract.total_value,
            guaranteed_money: contract.guaranteed_money,
            signing_bonus: contract.signing_bonus,
            cap_hit: contract.cap_hit,
            base_salary: contract.base_salary,
            roster_bonus: contract.roster_bonus,
            workout_bonus: contract.workout_bonus,
            incentives: contract.incentives,
            dead_money: contract.dead_money,
            contract_length: contract.contract_length,
            contract_start_year: contract.contract_start_year,
            contract_end_year: contract.contract_end_year,
            is_franchise_tag: contract.is_franchise_tag,
            is_transition_tag: contract.is_transition_tag,
            notes: contract.notes,
        }
    }
}
