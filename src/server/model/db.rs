//! Database model type aliases.
//!
//! This module provides type aliases for the SeaORM entity models used throughout the
//! application, giving a single point of reference for database model types without
//! importing from the `entity` crate directly.

/// Type alias for the team database model.
///
/// # Fields (from `entity::team::Model`)
/// - `id` - Primary key
/// - `name` - Team name
/// - `abbreviation` - Upper-case abbreviation (unique)
/// - `city` - Home city
/// - `conference` - `AFC` or `NFC`
/// - `division` - `North`, `South`, `East` or `West`
/// - `primary_color` - Hex color code (nullable)
/// - `secondary_color` - Hex color code (nullable)
pub type TeamModel = entity::team::Model;

/// Type alias for the player database model.
///
/// Biographical and draft fields are all nullable; `is_active` defaults to true.
pub type PlayerModel = entity::player::Model;

/// Type alias for the contract database model.
///
/// Links one player to one team for a single `contract_year`. The `cap_hit` field is the
/// amount counted against that team's cap in that year; the remaining money fields and the
/// franchise/transition tag flags are stored for display only.
pub type ContractModel = entity::contract::Model;

/// Type alias for the salary cap database model.
///
/// # Fields (from `entity::salary_cap::Model`)
/// - `id` - Primary key
/// - `year` - League year (unique)
/// - `salary_cap` - League-wide cap ceiling
/// - `salary_floor` - League-wide cap floor
/// - `luxury_tax_threshold` - Optional threshold
/// - `minimum_team_salary` - Optional minimum
/// - `notes` - Free text (nullable)
pub type SalaryCapModel = entity::salary_cap::Model;
