#![allow(unused_imports)]
//! Shared test utilities for integration tests.
//!
//! - `fixtures`: paths to and loaders for the metadata fixtures
//! - `assertions`: assertion helpers with descriptive failure messages

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_error_contains, assert_ok};
pub use fixtures::{fixture_path, load_fixture, FIXTURE_DIR};
