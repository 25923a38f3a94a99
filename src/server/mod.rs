//! Server application core modules.
//!
//! This module contains the HTTP side of the salary cap tracker: configuration and startup,
//! routing, controllers, the services holding the business rules, the repositories over the
//! database and the error types mapping failures to HTTP responses.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
