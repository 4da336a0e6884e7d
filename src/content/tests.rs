//! Content domain: tests for tuning parsing, loading, and validation.

use std::path::Path;

use super::{TuningFile, load_tuning, parse_single, resolve_tuning, validate_tuning};
use crate::movement::MovementTuning;

#[test]
fn test_parse_full_tuning() {
    let text = r#"(
        schema_version: 1,
        movement: (
            move_speed: 10.0,
            max_air_dashes: 2,
            ground_check_size: (0.6, 0.2),
        ),
        camera: (
            smooth_speed: 3.0,
            offset: (0.0, 1.5),
        ),
    )"#;

    let tuning: TuningFile = parse_single("tuning.ron", text).unwrap();
    assert_eq!(tuning.movement.move_speed, 10.0);
    assert_eq!(tuning.movement.max_air_dashes, 2);
    assert_eq!(tuning.movement.ground_check_size, (0.6, 0.2));
    // Unlisted fields keep their defaults
    assert_eq!(tuning.movement.jump_force, MovementTuning::default().jump_force);
    assert_eq!(tuning.camera.smooth_speed, 3.0);
    assert_eq!(tuning.camera.offset, (0.0, 1.5));
}

#[test]
fn test_parse_missing_sections_use_defaults() {
    let tuning: TuningFile = parse_single("tuning.ron", "(schema_version: 1)").unwrap();
    assert_eq!(tuning, TuningFile::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_single::<TuningFile>("tuning.ron", "(schema_version: \"one\")").unwrap_err();
    assert_eq!(err.file, "tuning.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load tuning.ron"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = load_tuning(Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_bundled_tuning_file_is_valid() {
    let tuning = load_tuning(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data")))
        .expect("bundled tuning.ron should load");
    assert!(validate_tuning(&tuning).is_empty());
}

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&TuningFile::default()).is_empty());
}

#[test]
fn test_validation_flags_bad_values() {
    let mut tuning = TuningFile::default();
    tuning.movement.coyote_time = -0.1;
    tuning.movement.air_control = 1.5;
    tuning.movement.body_mass = 0.0;
    tuning.movement.ground_check_size = (0.5, 0.0);
    tuning.camera.smooth_speed = f32::NAN;

    let errors = validate_tuning(&tuning);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "coyote_time",
            "air_control",
            "body_mass",
            "ground_check_size",
            "smooth_speed"
        ]
    );
    assert_eq!(errors[0].to_string(), "movement.coyote_time: must be >= 0, got -0.1");
}

#[test]
fn test_resolve_falls_back_on_invalid_values() {
    let mut tuning = TuningFile::default();
    tuning.movement.move_speed = 12.0;
    tuning.movement.dash_duration = -1.0;

    let resolved = resolve_tuning(Ok(tuning));
    assert_eq!(resolved, TuningFile::default());
}

#[test]
fn test_resolve_keeps_valid_file() {
    let mut tuning = TuningFile::default();
    tuning.movement.move_speed = 12.0;

    let resolved = resolve_tuning(Ok(tuning.clone()));
    assert_eq!(resolved, tuning);
}
