//! Test utilities for the salary cap tracker.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, and `build()` returns a [`TestContext`] holding an in-memory SQLite database with
//! everything inserted. Further fixtures can be inserted during the test through
//! [`TestContext::league`].

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::league::factory, TestBuilder, TestContext, TestError};
}
