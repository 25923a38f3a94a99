use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait,
};

use crate::model::contract::{ContractListParams, CreateContractDto};

pub struct ContractRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContractRepository<'a, C> {
    /// Creates a new instance of [`ContractRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new contract
    ///
    /// # Notes
    /// - The player and team must exist due to foreign key constraints
    pub async fn create(
        &self,
        contract: CreateContractDto,
    ) -> Result<entity::contract::Model, DbErr> {
        let contract = entity::contract::ActiveModel {
            player_id: ActiveValue::Set(contract.player_id),
            team_id: ActiveValue::Set(contract.team_id),
            contract_year: ActiveValue::Set(contract.contract_year),
            total_value: ActiveValue::Set(contract.total_value),
            guaranteed_money: ActiveValue::Set(contract.guaranteed_money),
            signing_bonus: ActiveValue::Set(contract.signing_bonus),
            cap_hit: ActiveValue::Set(contract.cap_hit),
            base_salary: ActiveValue::Set(contract.base_salary),
            roster_bonus: ActiveValue::Set(contract.roster_bonus),
            workout_bonus: ActiveValue::Set(contract.workout_bonus),
            incentives: ActiveValue::Set(contract.incentives),
            dead_money: ActiveValue::Set(contract.dead_money),
            contract_length: ActiveValue::Set(contract.contract_length),
            contract_start_year: ActiveValue::Set(contract.contract_start_year),
            contract_end_year: ActiveValue::Set(contract.contract_end_year),
            is_franchise_tag: ActiveValue::Set(contract.is_franchise_tag),
            is_transition_tag: ActiveValue::Set(contract.is_transition_tag),
            notes: ActiveValue::Set(contract.notes),
            ..Default::default()
        };

        contract.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        contract_id: i32,
    ) -> Result<Option<entity::contract::Model>, DbErr> {
        entity::prelude::Contract::find_by_id(contract_id)
            .one(self.db)
            .await
    }

    /// Get a page of contracts ordered by ID, filtered by any provided team, player or year
    pub async fn get_many(
        &self,
        params: &ContractListParams,
    ) -> Result<Vec<entity::contract::Model>, DbErr> {
        entity::prelude::Contract::find()
            .apply_if(params.team_id, |query, team_id| {
                query.filter(entity::contract::Column::TeamId.eq(team_id))
            })
            .apply_if(params.player_id, |query, player_id| {
                query.filter(entity::contract::Column::PlayerId.eq(player_id))
            })
            .apply_if(params.contract_year, |query, contract_year| {
                query.filter(entity::contract::Column::ContractYear.eq(contract_year))
            })
            .order_by_asc(entity::contract::Column::Id)
            .offset(params.skip)
            .limit(params.limit)
            .all(self.db)
            .await
    }

    /// Get every contract a team holds for a contract year
    pub async fn get_by_team_and_year(
        &self,
        team_id: i32,
        contract_year: i32,
    ) -> Result<Vec<entity::contract::Model>, DbErr> {
        entity::prelude::Contract::find()
            .filter(entity::contract::Column::TeamId.eq(team_id))
            .filter(entity::contract::Column::ContractYear.eq(contract_year))
            .order_by_asc(entity::contract::Column::Id)
            .all(self.db)
            .await
    }

    /// Sum of cap hits and number of contracts for a team in a contract year
    ///
    /// The sum is `None` when the team has no contracts for the year.
    pub async fn sum_cap_hit_and_count(
        &self,
        team_id: i32,
        contract_year: i32,
    ) -> Result<(Option<f64>, i64), DbErr> {
        let totals = entity::prelude::Contract::find()
            .select_only()
            .column_as(entity::contract::Column::CapHit.sum(), "total_cap_hit")
            .column_as(entity::contract::Column::Id.count(), "contract_count")
            .filter(entity::contract::Column::TeamId.eq(team_id))
            .filter(entity::contract::Column::ContractYear.eq(contract_year))
            .into_tuple::<(Option<f64>, i64)>()
            .one(self.db)
            .await?;

        Ok(totals.unwrap_or((None, 0)))
    }
}
