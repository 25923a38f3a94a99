//! Test fixture modules for database record creation.
//!
//! - `league` - teams, players, salary caps and contracts

pub mod league;
