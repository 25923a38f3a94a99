//! Cap summary aggregation.
//!
//! A team's cap summary for a year combines the league-wide cap figures for that year with
//! the total of the team's contract cap hits in the same year. Lookups are checked in a fixed
//! order: the year first, then the team. A year whose stored ceiling is not a positive
//! amount cannot produce a usage percentage and is reported as a [`CapError`].

use crate::{
    model::salary_cap::{CapSummaryTeamDto, TeamCapSummaryDto},
    server::{
        data::cap_ledger::{CapHitTotals, CapLedger},
        error::{cap::CapError, not_found::NotFoundError, Error},
        model::db::{SalaryCapModel, TeamModel},
    },
};

/// Computes [`TeamCapSummaryDto`]s from the reads of a [`CapLedger`].
pub struct CapSummaryAggregator<L: CapLedger> {
    ledger: L,
}

impl<L: CapLedger> CapSummaryAggregator<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Summarizes the team's cap standing for `year`.
    ///
    /// # Arguments
    /// - `team_id` - ID of the team to summarize
    /// - `year` - League year whose cap figures and contracts are used
    ///
    /// # Returns
    /// - `Ok(TeamCapSummaryDto)` - Point-in-time summary
    /// - `Err(Error::NotFoundError)` - No cap figures for `year`, otherwise no such team
    /// - `Err(Error::CapError)` - Stored ceiling for `year` is not positive
    /// - `Err(Error::DbErr)` - A ledger read failed
    pub async fn summarize(&self, team_id: i32, year: i32) -> Result<TeamCapSummaryDto, Error> {
        let Some(salary_cap) = self.ledger.find_salary_cap_by_year(year).await? else {
            return Err(NotFoundError::SalaryCap(year).into());
        };

        let Some(team) = self.ledger.find_team_by_id(team_id).await? else {
            return Err(NotFoundError::Team(team_id).into());
        };

        let totals = self.ledger.sum_cap_hit_and_count(team_id, year).await?;

        Ok(compute_cap_summary(team, &salary_cap, totals)?)
    }
}

/// Derives the summary fields from already loaded figures.
pub fn compute_cap_summary(
    team: TeamModel,
    salary_cap: &SalaryCapModel,
    totals: CapHitTotals,
) -> Result<TeamCapSummaryDto, CapError> {
    let ceiling = salary_cap.salary_cap;

    if !ceiling.is_finite() || ceiling <= 0.0 {
        return Err(CapError::NonPositiveCeiling {
            year: salary_cap.year,
            salary_cap: ceiling,
        });
    }

    let total_cap_hit = totals.total_cap_hit;

    Ok(TeamCapSummaryDto {
        team: CapSummaryTeamDto {
            id: team.id,
            name: team.name,
            abbreviation: team.abbreviation,
            city: team.city,
        },
        year: salary_cap.year,
        salary_cap: ceiling,
        salary_floor: salary_cap.salary_floor,
        total_cap_hit,
        remaining_cap: ceiling - total_cap_hit,
        cap_percentage_used: total_cap_hit / ceiling * 100.0,
        contract_count: totals.contract_count,
        over_cap: total_cap_hit > ceiling,
    })
}
