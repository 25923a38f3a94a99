use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalaryCap::Table)
                    .if_not_exists()
                    .col(pk_auto(SalaryCap::Id))
                    .col(integer_uniq(SalaryCap::Year))
                    .col(double(SalaryCap::SalaryCap))
                    .col(double(SalaryCap::SalaryFloor))
                    .col(double_null(SalaryCap::LuxuryTaxThreshold))
                    .col(double_null(SalaryCap::MinimumTeamSalary))
                    .col(text_null(SalaryCap::Notes))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalaryCap::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SalaryCap {
    #[sea_orm(iden = "salary_caps")]
    Table,
    Id,
    Year,
    SalaryCap,
    SalaryFloor,
    LuxuryTaxThreshold,
    MinimumTeamSalary,
    Notes,
}
