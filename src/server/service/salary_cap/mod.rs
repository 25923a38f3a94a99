//! Salary cap figures and per-team cap summaries.
//!
//! [`SalaryCapService`] covers the league-wide cap figures per year. The per-team summary is
//! computed by [`summary::CapSummaryAggregator`], which the service drives through a
//! database-backed [`DbCapLedger`].

pub mod summary;

use sea_orm::DatabaseConnection;

use crate::{
    model::salary_cap::{CreateSalaryCapDto, SalaryCapDto, TeamCapSummaryDto},
    server::{
        data::{cap_ledger::DbCapLedger, salary_cap::SalaryCapRepository},
        error::{
            conflict::ConflictError, not_found::NotFoundError, validation::ValidationError, Error,
        },
        service::{salary_cap::summary::CapSummaryAggregator, validation},
    },
};

pub struct SalaryCapService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SalaryCapService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists recorded cap years, most recent first.
    pub async fn list_salary_caps(&self) -> Result<Vec<SalaryCapDto>, Error> {
        let salary_caps = SalaryCapRepository::new(self.db).get_all().await?;

        Ok(salary_caps.into_iter().map(SalaryCapDto::from).collect())
    }

    pub async fn get_salary_cap(&self, year: i32) -> Result<SalaryCapDto, Error> {
        SalaryCapRepository::new(self.db)
            .get_by_year(year)
            .await?
            .map(SalaryCapDto::from)
            .ok_or_else(|| NotFoundError::SalaryCap(year).into())
    }

    /// Computes a team's cap standing for a year.
    ///
    /// # Returns
    /// - `Ok(TeamCapSummaryDto)` - Summary of the team's contracts for the year
    /// - `Err(Error::NotFoundError)` - No cap figures for the year, or no such team
    /// - `Err(Error::CapError)` - Stored cap ceiling is not a positive amount
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_team_cap_summary(
        &self,
        team_id: i32,
        year: i32,
    ) -> Result<TeamCapSummaryDto, Error> {
        CapSummaryAggregator::new(DbCapLedger::new(self.db))
            .summarize(team_id, year)
            .await
    }

    /// Validates and stores cap figures for a new year.
    ///
    /// # Returns
    /// - `Ok(SalaryCapDto)` - The stored cap figures
    /// - `Err(Error::ValidationError)` - Non-positive cap, floor above cap or invalid amount
    /// - `Err(Error::ConflictError)` - Figures for the year already exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_salary_cap(
        &self,
        salary_cap: CreateSalaryCapDto,
    ) -> Result<SalaryCapDto, Error> {
        let salary_cap = validate_salary_cap(salary_cap)?;

        let salary_cap_repo = SalaryCapRepository::new(self.db);

        if salary_cap_repo
            .get_by_year(salary_cap.year)
            .await?
            .is_some()
        {
            return Err(ConflictError::SalaryCapYear(salary_cap.year).into());
        }

        let created = salary_cap_repo.create(salary_cap).await?;

        Ok(SalaryCapDto::from(created))
    }
}

fn validate_salary_cap(
    salary_cap: CreateSalaryCapDto,
) -> Result<CreateSalaryCapDto, ValidationError> {
    if !salary_cap.salary_cap.is_finite() || salary_cap.salary_cap <= 0.0 {
        return Err(ValidationError::NonPositiveSalaryCap);
    }

    let salary_floor = validation::amount("salary_floor", salary_cap.salary_floor)?;
    if salary_floor > salary_cap.salary_cap {
        return Err(ValidationError::FloorAboveCap);
    }

    Ok(CreateSalaryCapDto {
        salary_floor,
        luxury_tax_threshold: validation::optional_amount(
            "luxury_tax_threshold",
            salary_cap.luxury_tax_threshold,
        )?,
        minimum_team_salary: validation::optional_amount(
            "minimum_team_salary",
            salary_cap.minimum_team_salary,
        )?,
        notes: validation::optional_text(salary_cap.notes),
        ..salary_cap
    })
}
