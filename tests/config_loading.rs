//! Integration tests for loading generation settings from disk.

use cave_explorer::{create_rng, CaveError, GenerationConfig, Generator, RoomGenerator};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_partial_file_fills_in_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "scene_width": 1280, "enemy_probability": 0.0 }}"#).unwrap();

    let config = GenerationConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.scene_width, 1280);
    assert_eq!(config.enemy_probability, 0.0);
    assert_eq!(config.scene_height, 600);
    assert_eq!(config.max_jump_distance, 120);

    let generator = RoomGenerator::new(config).unwrap();
    let room = generator.generate(&mut create_rng(1)).unwrap();
    assert!(room.enemies.is_empty());
    assert_eq!(room.ground().unwrap().rect.width, 1280);
    assert_eq!(room.key.platform.is_none(), generator.reachability(&room).elevated().is_empty());
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cave.json");

    let config = GenerationConfig {
        min_platforms: 3,
        max_platforms: 4,
        trap_probability: 1.0,
        ..GenerationConfig::for_scene(800, 480)
    };
    std::fs::write(&path, config.to_json().unwrap()).unwrap();

    assert_eq!(GenerationConfig::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = GenerationConfig::load_from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(CaveError::Io(_))));
}

#[test]
fn test_malformed_file_is_serde_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ scene_width: ").unwrap();

    let result = GenerationConfig::load_from_file(file.path());
    assert!(matches!(result, Err(CaveError::Serde(_))));
}

#[test]
fn test_loaded_invalid_config_is_rejected_by_generator() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "min_platforms": 9, "max_platforms": 2 }}"#).unwrap();

    let config = GenerationConfig::load_from_file(file.path()).unwrap();
    assert!(matches!(
        RoomGenerator::new(config),
        Err(CaveError::InvalidConfig(_))
    ));
}

#[test]
fn test_loaded_oversized_values_are_rejected_not_panicking() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "min_platforms": 0, "max_platforms": {} }}"#,
        u32::MAX
    )
    .unwrap();
    let config = GenerationConfig::load_from_file(file.path()).unwrap();
    assert!(matches!(
        RoomGenerator::new(config),
        Err(CaveError::InvalidConfig(_))
    ));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "side_margin": {} }}"#, i32::MAX / 2 + 1).unwrap();
    let config = GenerationConfig::load_from_file(file.path()).unwrap();
    assert!(matches!(
        RoomGenerator::new(config),
        Err(CaveError::InvalidConfig(_))
    ));
}
