//! Business logic services.
//!
//! Services sit between the HTTP controllers and the data repositories. They validate and
//! normalize create requests, translate missing records into [`NotFoundError`]s and convert
//! database models into API DTOs. The cap summary aggregator lives under [`salary_cap`].
//!
//! [`NotFoundError`]: crate::server::error::not_found::NotFoundError

pub mod contract;
pub mod player;
pub mod salary_cap;
pub mod team;
pub mod validation;
