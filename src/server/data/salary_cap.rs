use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::salary_cap::CreateSalaryCapDto;

pub struct SalaryCapRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SalaryCapRepository<'a, C> {
    /// Creates a new instance of [`SalaryCapRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates salary cap figures for a year
    pub async fn create(
        &self,
        salary_cap: CreateSalaryCapDto,
    ) -> Result<entity::salary_cap::Model, DbErr> {
        let salary_cap = entity::salary_cap::ActiveModel {
            year: ActiveValue::Set(salary_cap.year),
            salary_cap: ActiveValue::Set(salary_cap.salary_cap),
            salary_floor: ActiveValue::Set(salary_cap.salary_floor),
            luxury_tax_threshold: ActiveValue::Set(salary_cap.luxury_tax_threshold),
            minimum_team_salary: ActiveValue::Set(salary_cap.minimum_team_salary),
            notes: ActiveValue::Set(salary_cap.notes),
            ..Default::default()
        };

        salary_cap.insert(self.db).await
    }

    /// Get the salary cap figures for a year
    pub async fn get_by_year(
        &self,
        year: i32,
    ) -> Result<Option<entity::salary_cap::Model>, DbErr> {
        entity::prelude::SalaryCap::find()
            .filter(entity::salary_cap::Column::Year.eq(year))
            .one(self.db)
            .await
    }

    /// Get all salary cap years, most recent first
    pub async fn get_all(&self) -> Result<Vec<entity::salary_cap::Model>, DbErr> {
        entity::prelude::SalaryCap::find()
            .order_by_desc(entity::salary_cap::Column::Year)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use cap_tracker_test_utils::prelude::*;

        use crate::{model::salary_cap::CreateSalaryCapDto, server::data::salary_cap::SalaryCapRepository};

        fn create_salary_cap_dto(year: i32) -> CreateSalaryCapDto {
            CreateSalaryCapDto {
                year,
                salary_cap: 255_400_000.0,
                salary_floor: 229_860_000.0,
                luxury_tax_threshold: None,
                minimum_team_salary: None,
                notes: Some("2024 league year".to_string()),
            }
        }

        /// Expect success when creating salary cap figures for a new year
        #[tokio::test]
        async fn creates_salary_cap() -> Result<(), TestError> {
            let test = TestBuilder::new().with_league_tables().build().await?;

            let salary_cap_repo = SalaryCapRepository::new(&test.db);
            let created = salary_cap_repo.create(create_salary_cap_dto(2024)).await?;

            assert_eq!(created.year, 2024);
            assert_eq!(created.salary_cap, 255_400_000.0);
            assert_eq!(created.notes.as_deref(), Some("2024 league year"));

            Ok(())
        }

        /// Expect Error when the year already has salary cap figures
        #[tokio::test]
        async fn fails_for_duplicate_year() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_league_tables()
                .with_salary_cap(2024, 255_400_000.0, 229_860_000.0)
                .build()
                .await?;

            let salary_cap_repo = SalaryCapRepository::new(&test.db);
            let result = salary_cap_repo.create(create_salary_cap_dto(2024)).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_year {
        use cap_tracker_test_utils::prelude::*;

        use crate::server::data::salary_cap::SalaryCapRepository;

        /// Expect Some for a stored year
        #[tokio::test]
        async fn finds_salary_cap_for_year() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_league_tables()
                .with_salary_cap(2023, 224_800_000.0, 202_320_000.0)
                .with_salary_cap(2024, 255_400_000.0, 229_860_000.0)
                .build()
                .await?;

            let salary_cap_repo = SalaryCapRepository::new(&test.db);
            let result = salary_cap_repo.get_by_year(2024).await?;

            assert!(matches!(result, Some(ref cap) if cap.salary_cap == 255_400_000.0));

            Ok(())
        }

        /// Expect None for a year without figures
        #[tokio::test]
        async fn returns_none_for_missing_year() -> Result<(), TestError> {
            let test = TestBuilder::new().with_league_tables().build().await?;

            let salary_cap_repo = SalaryCapRepository::new(&test.db);
            let result = salary_cap_repo.get_by_year(2024).await?;

            assert!(result.is_none());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let salary_cap_repo = SalaryCapRepository::new(&test.db);
            let result = salary_cap_repo.get_by_year(2024).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_all {
        use cap_tracker_test_utils::prelude::*;

        use crate::server::data::salary_cap::SalaryCapRepository;

        /// Expect years in descending order
        #[tokio::test]
        async fn returns_years_most_recent_first() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_league_tables()
                .with_salary_cap(2023, 224_800_000.0, 202_320_000.0)
                .with_salary_cap(2025, 279_200_000.0, 251_280_000.0)
                .with_salary_cap(2024, 255_400_000.0, 229_860_000.0)
                .build()
                .await?;

            let salary_cap_repo = SalaryCapRepository::new(&test.db);
            let years: Vec<i32> = salary_cap_repo
                .get_all()
                .await?
                .into_iter()
                .map(|cap| cap.year)
                .collect();

            assert_eq!(years, vec![2025, 2024, 2023]);

            Ok(())
        }
    }
}
