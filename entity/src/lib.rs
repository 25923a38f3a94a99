//! Database entities for the salary cap tracker.

pub mod prelude;

pub mod contract;
pub mod player;
pub mod salary_cap;
pub mod team;
