//! League fixture utilities.
//!
//! Provides methods for inserting teams, players, salary caps and contracts into the test
//! database, plus factory functions for creating unsaved models.

pub mod factory;

use sea_orm::EntityTrait;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn league(&self) -> LeagueFixtures<'_> {
        LeagueFixtures { setup: self }
    }
}

pub struct LeagueFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> LeagueFixtures<'a> {
    pub async fn insert_mock_team(
        &self,
        abbreviation: &str,
    ) -> Result<entity::team::Model, TestError> {
        Ok(
            entity::prelude::Team::insert(factory::mock_team(abbreviation))
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    pub async fn insert_mock_player(
        &self,
        name: &str,
        position: &str,
    ) -> Result<entity::player::Model, TestError> {
        Ok(
            entity::prelude::Player::insert(factory::mock_player(name, position))
                .exec_with_returning(&self.setup.db)
                .await?,
        )
    }

    pub async fn insert_salary_cap(
        &self,
        year: i32,
        salary_cap: f64,
        salary_floor: f64,
    ) -> Result<entity::salary_cap::Model, TestError> {
        Ok(entity::prelude::SalaryCap::insert(factory::mock_salary_cap(
            year,
            salary_cap,
            salary_floor,
        ))
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_contract(
        &self,
        player_id: i32,
        team_id: i32,
        contract_year: i32,
        cap_hit: f64,
    ) -> Result<entity::contract::Model, TestError> {
        Ok(entity::prelude::Contract::insert(factory::mock_contract(
            player_id,
            team_id,
            contract_year,
            cap_hit,
        ))
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Inserts one contract per cap hit for the team and year, each with a new mock player.
    pub async fn insert_team_contracts(
        &self,
        team_id: i32,
        contract_year: i32,
        cap_hits: &[f64],
    ) -> Result<Vec<entity::contract::Model>, TestError> {
        let mut contracts = Vec::with_capacity(cap_hits.len());

        for (index, cap_hit) in cap_hits.iter().enumerate() {
            let player = self
                .insert_mock_player(&format!("Player {team_id}-{contract_year}-{index}"), "WR")
                .await?;
            let contract = self
                .insert_mock_contract(player.id, team_id, contract_year, *cap_hit)
                .await?;

            contracts.push(contract);
        }

        Ok(contracts)
    }
}
