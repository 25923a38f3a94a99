//! Factory functions for unsaved league entity models.
//!
//! Each factory returns an `ActiveModel` with every column set to standard test values so it
//! can be inserted directly or tweaked by the caller first.

use chrono::NaiveDate;
use sea_orm::ActiveValue;

/// Create a mock team with the provided abbreviation.
///
/// The team name and city are derived from the abbreviation so multiple mock teams stay
/// distinguishable.
pub fn mock_team(abbreviation: &str) -> entity::team::ActiveModel {
    entity::team::ActiveModel {
        name: ActiveValue::Set(format!("{abbreviation} Team")),
        abbreviation: ActiveValue::Set(abbreviation.to_uppercase()),
        city: ActiveValue::Set(format!("{abbreviation} City")),
        conference: ActiveValue::Set("AFC".to_string()),
        division: ActiveValue::Set("West".to_string()),
        primary_color: ActiveValue::Set(Some("#E31837".to_string())),
        secondary_color: ActiveValue::Set(Some("#FFB81C".to_string())),
        ..Default::default()
    }
}

/// Create a mock active player.
pub fn mock_player(name: &str, position: &str) -> entity::player::ActiveModel {
    entity::player::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        position: ActiveValue::Set(position.to_uppercase()),
        jersey_number: ActiveValue::Set(Some(15)),
        height_inches: ActiveValue::Set(Some(74)),
        weight_lbs: ActiveValue::Set(Some(225)),
        birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1995, 9, 17)),
        college: ActiveValue::Set(Some("Texas Tech".to_string())),
        draft_year: ActiveValue::Set(Some(2017)),
        draft_round: ActiveValue::Set(Some(1)),
        draft_pick: ActiveValue::Set(Some(10)),
        is_active: ActiveValue::Set(true),
        ..Default::default()
    }
}

/// Create mock salary cap figures for a year.
pub fn mock_salary_cap(
    year: i32,
    salary_cap: f64,
    salary_floor: f64,
) -> entity::salary_cap::ActiveModel {
    entity::salary_cap::ActiveModel {
        year: ActiveValue::Set(year),
        salary_cap: ActiveValue::Set(salary_cap),
        salary_floor: ActiveValue::Set(salary_floor),
        luxury_tax_threshold: ActiveValue::Set(None),
        minimum_team_salary: ActiveValue::Set(None),
        notes: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Create a mock single-year contract whose base salary equals its cap hit.
pub fn mock_contract(
    player_id: i32,
    team_id: i32,
    contract_year: i32,
    cap_hit: f64,
) -> entity::contract::ActiveModel {
    entity::contract::ActiveModel {
        player_id: ActiveValue::Set(player_id),
        team_id: ActiveValue::Set(team_id),
        contract_year: ActiveValue::Set(contract_year),
        total_value: ActiveValue::Set(cap_hit),
        guaranteed_money: ActiveValue::Set(0.0),
        signing_bonus: ActiveValue::Set(0.0),
        cap_hit: ActiveValue::Set(cap_hit),
        base_salary: ActiveValue::Set(cap_hit),
        roster_bonus: ActiveValue::Set(0.0),
        workout_bonus: ActiveValue::Set(0.0),
        incentives: ActiveValue::Set(0.0),
        dead_money: ActiveValue::Set(0.0),
        contract_length: ActiveValue::Set(Some(1)),
        contract_start_year: ActiveValue::Set(Some(contract_year)),
        contract_end_year: ActiveValue::Set(Some(contract_year)),
        is_franchise_tag: ActiveValue::Set(false),
        is_transition_tag: ActiveValue::Set(false),
        notes: ActiveValue::Set(None),
        ..Default::default()
    }
}
