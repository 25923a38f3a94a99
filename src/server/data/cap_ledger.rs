//! Read interface consumed by the cap summary aggregator.
//!
//! The aggregator only needs three reads from the store. Keeping them behind the
//! [`CapLedger`] trait lets production code read through the database repositories while
//! tests substitute an in-memory ledger.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::{contract::ContractRepository, salary_cap::SalaryCapRepository, team::TeamRepository},
    model::db::{SalaryCapModel, TeamModel},
};

/// Cap hit total and contract count for one team in one year.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CapHitTotals {
    /// Sum of `cap_hit`, `0.0` when the team has no contracts for the year
    pub total_cap_hit: f64,
    pub contract_count: i64,
}

#[async_trait]
pub trait CapLedger: Send + Sync {
    /// League cap figures for a year, if recorded
    async fn find_salary_cap_by_year(&self, year: i32) -> Result<Option<SalaryCapModel>, DbErr>;

    async fn find_team_by_id(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr>;

    /// Totals over the contracts with matching `team_id` and `contract_year`
    async fn sum_cap_hit_and_count(&self, team_id: i32, year: i32)
        -> Result<CapHitTotals, DbErr>;
}

/// [`CapLedger`] backed by the database repositories.
pub struct DbCapLedger<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DbCapLedger<'a, C> {
    /// Creates a new instance of [`DbCapLedger`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: ConnectionTrait + Sync> CapLedger for DbCapLedger<'_, C> {
    async fn find_salary_cap_by_year(&self, year: i32) -> Result<Option<SalaryCapModel>, DbErr> {
        SalaryCapRepository::new(self.db).get_by_year(year).await
    }

    async fn find_team_by_id(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr> {
        TeamRepository::new(self.db).get_by_id(team_id).await
    }

    async fn sum_cap_hit_and_count(
        &self,
        team_id: i32,
        year: i32,
    ) -> Result<CapHitTotals, DbErr> {
        let (total_cap_hit, contract_count) = ContractRepository::new(self.db)
            .sum_cap_hit_and_count(team_id, year)
            .await?;

        Ok(CapHitTotals {
            total_cap_hit: total_cap_hit.unwrap_or(0.0),
            contract_count,
        })
    }
}
