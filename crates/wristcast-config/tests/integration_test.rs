//! Integration tests for the wristcast-config crate.
//!
//! These tests run the loader and preference store against real files
//! in a temporary directory.

use wristcast_common::MeasurementSystem;
use wristcast_config::{AppConfig, ConfigLoader, FilePreferenceStore, PreferenceStore};

#[tokio::test]
async fn test_config_survives_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new(dir.path().join("wristcast.toml"));

    let mut config = AppConfig::default();
    config.units.measurement_system = MeasurementSystem::UsCustomary;
    config.canvas.width = 200.0;
    config.graph.line_color = "#ff7f0e".to_string();
    config.logging.level = "debug".to_string();

    loader.save(&config).await.unwrap();
    let loaded = loader.load().await.unwrap();

    assert_eq!(
        loaded.units.measurement_system,
        MeasurementSystem::UsCustomary
    );
    assert_eq!(loaded.canvas.width, 200.0);
    assert_eq!(loaded.graph.line_color, "#ff7f0e");
    assert_eq!(loaded.logging.level, "debug");
}

#[tokio::test]
async fn test_missing_config_file_yields_valid_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new(dir.path().join("absent.toml"));

    let config = loader.load().await.unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.units.measurement_system, MeasurementSystem::Metric);
}

#[tokio::test]
async fn test_hand_written_partial_config_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wristcast.toml");
    tokio::fs::write(
        &path,
        r#"
[units]
measurement_system = "USCustomary"

[graph]
line_width = 3
"#,
    )
    .await
    .unwrap();

    let config = ConfigLoader::new(path).load().await.unwrap();
    assert_eq!(
        config.units.measurement_system,
        MeasurementSystem::UsCustomary
    );
    assert_eq!(config.graph.line_width, 3);
    // untouched sections keep their defaults
    assert_eq!(config.canvas.width, 312.0);
    assert_eq!(config.canvas.height, 88.0);
}

#[tokio::test]
async fn test_invalid_config_file_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wristcast.toml");
    tokio::fs::write(&path, "[canvas]\nwidth = -5.0\n")
        .await
        .unwrap();

    assert!(ConfigLoader::new(path).load().await.is_err());
}

#[tokio::test]
async fn test_preference_store_round_trip_and_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferenceStore::new(dir.path().join("preferences.toml"));

    // nothing stored yet
    assert_eq!(
        store.load_measurement_system().await.unwrap(),
        MeasurementSystem::Metric
    );

    store
        .save_measurement_system(MeasurementSystem::UsCustomary)
        .await
        .unwrap();
    assert_eq!(
        store.load_measurement_system().await.unwrap(),
        MeasurementSystem::UsCustomary
    );
}

#[tokio::test]
async fn test_config_and_preferences_share_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new(dir.path().join("wristcast.toml"));
    let store = FilePreferenceStore::new(dir.path().join("preferences.toml"));

    loader.save(&AppConfig::default()).await.unwrap();
    store
        .save_measurement_system(MeasurementSystem::UsCustomary)
        .await
        .unwrap();

    // neither write clobbers the other
    assert!(loader.load().await.is_ok());
    assert_eq!(
        store.load_measurement_system().await.unwrap(),
        MeasurementSystem::UsCustomary
    );
}
