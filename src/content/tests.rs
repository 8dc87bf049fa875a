//! Content domain: tests for data parsing and validation.

use std::path::Path;

use super::loader::parse_single;
use super::validation::{validate_arena, validate_locomotion};
use super::{ArenaDef, GameData, LocomotionDef, load_all_content, load_game_data};

const LOCOMOTION_RON: &str = include_str!("../../assets/data/locomotion.ron");
const ARENA_RON: &str = include_str!("../../assets/data/arena.ron");

// -----------------------------------------------------------------------------
// Shipped data files
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_locomotion_parses_and_validates() {
    let def: LocomotionDef = parse_single(LOCOMOTION_RON, "locomotion.ron").unwrap();
    assert_eq!(def.schema_version, 1);
    assert_eq!(def.cam_limit, 80.0);
    assert_eq!(def.jetpack.max_fuel, 100.0);
    assert!(validate_locomotion(&def).is_empty());
}

#[test]
fn test_shipped_arena_parses_and_validates() {
    let def: ArenaDef = parse_single(ARENA_RON, "arena.ron").unwrap();
    assert_eq!(def.spawn_points.len(), 5);
    assert!(validate_arena(&def).is_empty());
}

#[test]
fn test_defaults_are_valid() {
    assert!(validate_locomotion(&LocomotionDef::default()).is_empty());
    assert!(validate_arena(&ArenaDef::default()).is_empty());
}

// -----------------------------------------------------------------------------
// Error reporting
// -----------------------------------------------------------------------------

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<LocomotionDef>("(schema_version: 1", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_directory_reports_every_file() {
    let errors = load_all_content(Path::new("does/not/exist")).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.message.starts_with("IO error")));
}

#[test]
fn test_missing_directory_falls_back_to_defaults() {
    let data = load_game_data(Path::new("does/not/exist"));
    assert_eq!(
        data.locomotion.jetpack.max_fuel,
        GameData::default().locomotion.jetpack.max_fuel
    );
}

#[test]
fn test_locomotion_range_checks() {
    let mut def = LocomotionDef::default();
    def.max_velocity = 0.0;
    def.jetpack.fuel_usage_rate = -1.0;
    def.cam_limit = 120.0;

    let errors = validate_locomotion(&def);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(errors.len(), 3);
    assert!(fields.contains(&"max_velocity"));
    assert!(fields.contains(&"jetpack.fuel_usage_rate"));
    assert!(fields.contains(&"cam_limit"));
}

#[test]
fn test_exhaust_lifetime_must_be_positive() {
    let mut def = LocomotionDef::default();
    def.controls.exhaust_lifetime = 0.0;

    let errors = validate_locomotion(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "controls.exhaust_lifetime");
}

#[test]
fn test_arena_requires_spawn_points_above_kill_plane() {
    let mut def = ArenaDef::default();
    def.spawn_points = vec![];
    assert_eq!(validate_arena(&def).len(), 1);

    def.spawn_points = vec![(0.0, -50.0, 0.0), (0.0, 2.0, 0.0)];
    let errors = validate_arena(&def);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "spawn_points");
}
