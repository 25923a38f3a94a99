pub use sea_orm_migration::prelude::*;

mod m20251017_000001_team;
mod m20251017_000002_player;
mod m20251017_000003_salary_cap;
mod m20251017_000004_contract;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_team::Migration),
            Box::new(m20251017_000002_player::Migration),
            Box::new(m20251017_000003_salary_cap::Migration),
            Box::new(m20251017_000004_contract::Migration),
        ]
    }
}
