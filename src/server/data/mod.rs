//! Data access layer repositories.
//!
//! This module contains the database repositories for the four league record types plus the
//! [`cap_ledger::CapLedger`] read interface consumed by the cap summary aggregator.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so callers may pass either a
//! connection or a transaction.

pub mod cap_ledger;
pub mod contract;
pub mod player;
pub mod salary_cap;
pub mod team;
