use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string_len(Team::Name, 100))
                    .col(string_len_uniq(Team::Abbreviation, 5))
                    .col(string_len(Team::City, 50))
                    .col(string_len(Team::Conference, 3))
                    .col(string_len(Team::Division, 10))
                    .col(string_len_null(Team::PrimaryColor, 7))
                    .col(string_len_null(Team::SecondaryColor, 7))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    Name,
    Abbreviation,
    City,
    Conference,
    Division,
    PrimaryColor,
    SecondaryColor,
}
