use sea_orm::DatabaseConnection;

use crate::{
    model::contract::{ContractDto, ContractListParams, CreateContractDto},
    server::{
        data::{contract::ContractRepository, player::PlayerRepository, team::TeamRepository},
        error::{not_found::NotFoundError, validation::ValidationError, Error},
        service::validation,
    },
};

/// Service for listing and registering contracts.
pub struct ContractService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContractService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists contracts matching every provided filter, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<ContractDto>)` - The requested page of contracts
    /// - `Err(Error::ValidationError)` - `skip` or `limit` beyond the signed 64-bit range
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_contracts(
        &self,
        params: ContractListParams,
    ) -> Result<Vec<ContractDto>, Error> {
        let (skip, limit) = validation::page(params.skip, params.limit)?;
        let params = ContractListParams {
            skip,
            limit,
            ..params
        };

        let contracts = ContractRepository::new(self.db).get_many(&params).await?;

        Ok(contracts.into_iter().map(ContractDto::from).collect())
    }

    pub async fn get_contract(&self, contract_id: i32) -> Result<ContractDto, Error> {
        ContractRepository::new(self.db)
            .get_by_id(contract_id)
            .await?
            .map(ContractDto::from)
            .ok_or_else(|| NotFoundError::Contract(contract_id).into())
    }

    /// All contracts a team holds for a year; empty when there are none.
    pub async fn get_team_contracts_by_year(
        &self,
        team_id: i32,
        year: i32,
    ) -> Result<Vec<ContractDto>, Error> {
        let contracts = ContractRepository::new(self.db)
            .get_by_team_and_year(team_id, year)
            .await?;

        Ok(contracts.into_iter().map(ContractDto::from).collect())
    }

    /// Validates and stores a new contract.
    ///
    /// # Returns
    /// - `Ok(ContractDto)` - The stored contract
    /// - `Err(Error::ValidationError)` - Negative or non-finite amount, or start year after end year
    /// - `Err(Error::NotFoundError)` - Referenced player or team does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_contract(&self, contract: CreateContractDto) -> Result<ContractDto, Error> {
        let contract = validate_contract(contract)?;

        if PlayerRepository::new(self.db)
            .get_by_id(contract.player_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Player(contract.player_id).into());
        }

        if TeamRepository::new(self.db)
            .get_by_id(contract.team_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Team(contract.team_id).into());
        }

        let created = ContractRepository::new(self.db).create(contract).await?;

        Ok(ContractDto::from(created))
    }
}

fn validate_contract(contract: CreateContractDto) -> Result<CreateContractDto, ValidationError> {
    if let (Some(start), Some(end)) = (contract.contract_start_year, contract.contract_end_year) {
        if start > end {
            return Err(ValidationError::StartAfterEnd);
        }
    }

    Ok(CreateContractDto {
        total_value: validation::amount("total_value", contract.total_value)?,
        guaranteed_money: validation::amount("guaranteed_money", contract.guaranteed_money)?,
        signing_bonus: validation::amount("signing_bonus", contract.signing_bonus)?,
        cap_hit: validation::amount("cap_hit", contract.cap_hit)?,
        base_salary: validation::amount("base_salary", contract.base_salary)?,
        roster_bonus: validation::amount("roster_bonus", contract.roster_bonus)?,
        workout_bonus: validation::amount("workout_bonus", contract.workout_bonus)?,
        incentives: validation::amount("incentives", contract.incentives)?,
        dead_money: validation::amount("dead_money", contract.dead_money)?,
        notes: validation::optional_text(contract.notes),
        ..contract
    })
}
