//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use gridroute_lib::{load_terrain, Coordinate, Terrain};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the 5x5 reference terrain description.
#[allow(dead_code)]
pub fn fixture_map_path() -> PathBuf {
    fixtures_dir().join("map.txt")
}

/// Load the 5x5 reference terrain.
#[allow(dead_code)]
pub fn fixture_terrain() -> Terrain {
    load_terrain(&fixture_map_path()).expect("fixture map loads")
}

/// Coordinate of a 1-based case number on the reference terrain.
#[allow(dead_code)]
pub fn case(number: u32) -> Coordinate {
    Coordinate::from_case(number, 5).expect("case fits the fixture terrain")
}
