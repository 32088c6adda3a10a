//! Shared fixture builders and golden-dataset loading for newsrec tests.
//!
//! Provides deterministic entity builders (fixed reference instant, axis
//! vectors) and typed deserialization of the JSON fixtures under
//! `fixtures/`, usable from any crate in the workspace.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use newsrec_core::{ContentVector, Entity};

/// Fixed reference instant so fixture-driven tests are reproducible.
pub fn frozen_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// Entity with the given vector, timestamped `days_ago` before `now`.
pub fn entity_at(values: Vec<f32>, days_ago: i64, now: DateTime<Utc>) -> Entity {
    Entity::new(
        Uuid::new_v4(),
        ContentVector::from(values),
        now - Duration::days(days_ago),
    )
}

/// Entity whose vector is the unit vector along `axis`.
pub fn axis_entity(dims: usize, axis: usize, days_ago: i64, now: DateTime<Utc>) -> Entity {
    let mut values = vec![0.0f32; dims];
    values[axis] = 1.0;
    entity_at(values, days_ago, now)
}

/// Entity with no materialized vector.
pub fn unvectored_entity(days_ago: i64, now: DateTime<Utc>) -> Entity {
    Entity::without_vector(Uuid::new_v4(), now - Duration::days(days_ago))
}

/// Root directory of the test-fixtures folder.
///
/// Works from any crate in the workspace: walks up from the crate manifest
/// until a `test-fixtures` directory is found.
pub fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!("Could not find test-fixtures directory from CARGO_MANIFEST_DIR={manifest_dir}");
        }
    }
    path.join("test-fixtures").join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}
