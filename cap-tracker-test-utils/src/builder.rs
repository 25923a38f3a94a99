//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Configuration methods are chained together and all queued operations run
//! during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_league_tables: bool,

    // Database fixtures to insert
    teams: Vec<String>,
    players: Vec<(String, String)>, // (name, position)
    salary_caps: Vec<(i32, f64, f64)>, // (year, salary_cap, salary_floor)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_league_tables: false,
            teams: Vec::new(),
            players: Vec::new(),
            salary_caps: Vec::new(),
        }
    }

    /// Add all league tables to the test database.
    ///
    /// Creates the Team, Player, SalaryCap and Contract tables, in foreign key order.
    pub fn with_league_tables(mut self) -> Self {
        self.include_league_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, executed during `build()`. Chain
    /// multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cap_tracker_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), cap_tracker_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Team)
    ///     .with_table(SalaryCap)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock team with the provided abbreviation.
    pub fn with_mock_team(mut self, abbreviation: impl Into<String>) -> Self {
        self.teams.push(abbreviation.into());
        self
    }

    /// Insert a mock active player.
    pub fn with_mock_player(mut self, name: impl Into<String>, position: impl Into<String>) -> Self {
        self.players.push((name.into(), position.into()));
        self
    }

    /// Insert salary cap figures for a year.
    pub fn with_salary_cap(mut self, year: i32, salary_cap: f64, salary_floor: f64) -> Self {
        self.salary_caps.push((year, salary_cap, salary_floor));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes queued operations in order:
    /// 1. Creates database tables (league tables if requested, then custom tables)
    /// 2. Inserts teams, players and salary caps
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_league_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::SalaryCap),
                schema.create_table_from_entity(entity::prelude::Contract),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for abbreviation in self.teams {
            setup.league().insert_mock_team(&abbreviation).await?;
        }

        for (name, position) in self.players {
            setup.league().insert_mock_player(&name, &position).await?;
        }

        for (year, salary_cap, salary_floor) in self.salary_caps {
            setup
                .league()
                .insert_salary_cap(year, salary_cap, salary_floor)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
