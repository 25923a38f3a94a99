use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SalaryCapDto {
    pub id: i32,
    pub year: i32,
    pub salary_cap: f64,
    pub salary_floor: f64,
    pub luxury_tax_threshold: Option<f64>,
    pub minimum_team_salary: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateSalaryCapDto {
    pub year: i32,
    pub salary_cap: f64,
    pub salary_floor: f64,
    pub luxury_tax_threshold: Option<f64>,
    pub minimum_team_salary: Option<f64>,
    pub notes: Option<String>,
}

/// A team's cap standing for one league year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TeamCapSummaryDto {
    pub team: CapSummaryTeamDto,
    pub year: i32,
    /// League-wide cap ceiling for the year
    pub salary_cap: f64,
    /// League-wide cap floor for the year
    pub salary_floor: f64,
    /// Sum of cap hits of the team's contracts for the year
    pub total_cap_hit: f64,
    /// Cap ceiling minus total cap hit, negative when over the cap
    pub remaining_cap: f64,
    pub cap_percentage_used: f64,
    pub contract_count: i64,
    pub over_cap: bool,
}

/// Team identity fields embedded in a [`TeamCapSummaryDto`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CapSummaryTeamDto {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
    pub city: String,
}

impl From<entity::salary_cap::Model> for SalaryCapDto {
    fn from(salary_cap: entity::salary_cap::Model) -> Self {
        Self {
            id: salary_cap.id,
            year: salary_cap.year,
            salary_cap: salary_cap.salary_cap,
            salary_floor: salary_cap.salary_floor,
            luxury_tax_threshold: salary_cap.luxury_tax_threshold,
            minimum_team_salary: salary_cap.minimum_team_salary,
            notes: salary_cap.notes,
        }
    }
}
