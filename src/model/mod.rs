//! API data transfer objects shared by the controllers and services.

pub mod api;
pub mod contract;
pub mod player;
pub mod salary_cap;
pub mod team;
