//! Settings Tests

use std::io::Write;

use glam::Vec3;

use strider::errors::Error;
use strider::settings::{Settings, rgb};

#[test]
fn defaults_match_the_shipped_scene() {
    let settings = Settings::default();

    assert_eq!(settings.assets.idle, "Idle.glb");
    assert_eq!(settings.assets.run, "Running.glb");
    assert_eq!(settings.locomotion.move_speed, 0.1);
    assert_eq!(settings.locomotion.rotation_speed, 0.05);
    assert_eq!(settings.locomotion.world_boundary, 50.0);
    assert_eq!(settings.blend.fade_duration, 0.5);
    assert_eq!(settings.blend.backward_rate, 0.5);
    assert_eq!(settings.camera.follow_offset, Vec3::new(0.0, 2.0, -4.0));
    assert_eq!(settings.keys.forward, "w");
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let settings = Settings::from_json_str(
        r#"{
            "locomotion": { "move_speed": 0.2 },
            "keys": { "forward": "z", "turn_left": "q" },
            "camera": { "follow_offset": [0.0, 3.0, -6.0] }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.locomotion.move_speed, 0.2);
    assert_eq!(settings.locomotion.world_boundary, 50.0);
    assert_eq!(settings.keys.forward, "z");
    assert_eq!(settings.keys.backward, "s");
    assert_eq!(settings.camera.follow_offset, Vec3::new(0.0, 3.0, -6.0));
    assert_eq!(settings.camera.fov, 75.0);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(Settings::from_json_str("{}").unwrap(), Settings::default());
}

#[test]
fn malformed_json_is_an_error() {
    let err = Settings::from_json_str("{ \"blend\": ").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn load_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "assets": {{ "root": "/data/characters", "model_scale": 0.01 }} }}"#).unwrap();

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.assets.root, "/data/characters");
    assert_eq!(settings.assets.model_scale, 0.01);
    assert_eq!(settings.assets.idle, "Idle.glb");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn settings_round_trip_through_json() {
    let mut settings = Settings::default();
    settings.window.title = "Test".into();
    settings.environment.grid_divisions = 10;

    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(Settings::from_json_str(&json).unwrap(), settings);
}

#[test]
fn rgb_splits_channels() {
    assert_eq!(rgb(0xff_00_00), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(rgb(0x00_00_ff), Vec3::new(0.0, 0.0, 1.0));
    let sky = rgb(0x87_ce_eb);
    assert!((sky.x - 135.0 / 255.0).abs() < 1e-6);
}
