//! Fixture loading utilities for tests.

use std::path::PathBuf;

/// Fixture directory relative to the project root.
pub const FIXTURE_DIR: &str = "tests/fixture/metadata";

/// Absolute path of a fixture file, e.g. `fixture_path("erc20.json")`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(FIXTURE_DIR)
        .join(name)
}

/// Parse a fixture file.
///
/// # Panics
///
/// Panics if the fixture is missing or is not valid JSON.
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> serde_json::Value {
    let path = fixture_path(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("fixture {} is not valid JSON: {}", path.display(), e))
}
