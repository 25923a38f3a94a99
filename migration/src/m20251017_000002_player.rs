use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYERS_POSITION: &str = "idx-players-position";
static IDX_PLAYERS_NAME: &str = "idx-players-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_len(Player::Name, 100))
                    .col(string_len(Player::Position, 10))
                    .col(integer_null(Player::JerseyNumber))
                    .col(integer_null(Player::HeightInches))
                    .col(integer_null(Player::WeightLbs))
                    .col(date_null(Player::BirthDate))
                    .col(string_len_null(Player::College, 100))
                    .col(integer_null(Player::DraftYear))
                    .col(integer_null(Player::DraftRound))
                    .col(integer_null(Player::DraftPick))
                    .col(boolean(Player::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYERS_POSITION)
                    .table(Player::Table)
                    .col(Player::Position)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYERS_NAME)
                    .table(Player::Table)
                    .col(Player::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYERS_NAME)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYERS_POSITION)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Id,
    Name,
    Position,
    JerseyNumber,
    HeightInches,
    WeightLbs,
    BirthDate,
    College,
    DraftYear,
    DraftRound,
    DraftPick,
    IsActive,
}
