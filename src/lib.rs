//! Salary cap tracker service.
//!
//! Tracks football teams, players, contracts and league salary caps, and
//! computes per-team cap usage summaries over an HTTP JSON API.

pub mod model;
pub mod server;
