//! Test utilities for ghdata.
//!
//! Tests are set up in two phases:
//! 1. [`TestBuilder`] declares the tables and base fixtures a test needs.
//! 2. The resulting [`TestContext`] gives access to the in-memory SQLite database and to
//!    fixture helpers inserting GHTorrent rows while the test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*, fixtures::ghtorrent::factory, test_setup_with_ghtorrent_tables,
        test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}
