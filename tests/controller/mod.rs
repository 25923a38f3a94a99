//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extractors built by hand, against an in-memory SQLite
//! database seeded through the test builder.

mod contract;
mod player;
mod salary_cap;
mod team;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cap_tracker::{model::api::ErrorDto, server::model::app::AppState};
use cap_tracker_test_utils::prelude::*;

use crate::util::response_json;
