use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_team::Team, m20251017_000002_player::Player};

static IDX_CONTRACTS_TEAM_ID_CONTRACT_YEAR: &str = "idx-contracts-team_id-contract_year";
static IDX_CONTRACTS_PLAYER_ID: &str = "idx-contracts-player_id";
static FK_CONTRACTS_TEAM_ID: &str = "fk-contracts-team_id";
static FK_CONTRACTS_PLAYER_ID: &str = "fk-contracts-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contract::Table)
                    .if_not_exists()
                    .col(pk_auto(Contract::Id))
                    .col(integer(Contract::PlayerId))
                    .col(integer(Contract::TeamId))
                    .col(integer(Contract::ContractYear))
                    .col(double(Contract::TotalValue))
                    .col(double(Contract::GuaranteedMoney).default(0.0))
                    .col(double(Contract::SigningBonus).default(0.0))
                    .col(double(Contract::CapHit))
                    .col(double(Contract::BaseSalary))
                    .col(double(Contract::RosterBonus).default(0.0))
                    .col(double(Contract::WorkoutBonus).default(0.0))
                    .col(double(Contract::Incentives).default(0.0))
                    .col(double(Contract::DeadMoney).default(0.0))
                    .col(integer_null(Contract::ContractLength))
                    .col(integer_null(Contract::ContractStartYear))
                    .col(integer_null(Contract::ContractEndYear))
                    .col(boolean(Contract::IsFranchiseTag).default(false))
                    .col(boolean(Contract::IsTransitionTag).default(false))
                    .col(text_null(Contract::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONTRACTS_PLAYER_ID)
                            .from(Contract::Table, Contract::PlayerId)
                            .to(Player::Table, Player::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CONTRACTS_TEAM_ID)
                            .from(Contract::Table, Contract::TeamId)
                            .to(Team::Table, Team::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACTS_TEAM_ID_CONTRACT_YEAR)
                    .table(Contract::Table)
                    .col(Contract::TeamId)
                    .col(Contract::ContractYear)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTRACTS_PLAYER_ID)
                    .table(Contract::Table)
                    .col(Contract::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACTS_PLAYER_ID)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTRACTS_TEAM_ID_CONTRACT_YEAR)
                    .table(Contract::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Contract::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Contract {
    #[sea_orm(iden = "contracts")]
    Table,
    Id,
    PlayerId,
    TeamId,
    ContractYear,
    TotalValue,
    GuaranteedMoney,
    SigningBonus,
    CapHit,
    BaseSalary,
    RosterBonus,
    WorkoutBonus,
    Incentives,
    DeadMoney,
    ContractLength,
    ContractStartYear,
    ContractEndYear,
    IsFranchiseTag,
    IsTransitionTag,
    Notes,
}
