//! Preference store for the persisted unit-system selection.
//!
//! The selection is stored as a string-valued setting, read at startup
//! and written on user toggle. The store is injected wherever it is
//! needed rather than living in ambient global state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use wristcast_common::{MeasurementSystem, Result};

/// Persistence boundary for user preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Loads the persisted measurement system, falling back to the
    /// default when nothing has been stored yet.
    async fn load_measurement_system(&self) -> Result<MeasurementSystem>;

    /// Persists the measurement system selection.
    async fn save_measurement_system(&self, system: MeasurementSystem) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct PreferencesFile {
    measurement_system: String,
}

/// File-backed preference store using TOML.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn load_measurement_system(&self) -> Result<MeasurementSystem> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let prefs: PreferencesFile = toml::from_str(&contents)?;
                let system = prefs.measurement_system.parse()?;
                debug!(%system, "loaded measurement system preference");
                Ok(system)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("no stored preference, defaulting to Metric");
                Ok(MeasurementSystem::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn save_measurement_system(&self, system: MeasurementSystem) -> Result<()> {
        let prefs = PreferencesFile {
            measurement_system: system.as_str().to_string(),
        };
        let contents = toml::to_string_pretty(&prefs)?;
        let tmp_path = self.path.with_extension("toml.tmp");

        tokio::fs::write(&tmp_path, contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        debug!(%system, "saved measurement system preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_defaults_to_metric() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("missing.toml"));

        let system = store.load_measurement_system().await.unwrap();
        assert_eq!(system, MeasurementSystem::Metric);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("preferences.toml"));

        store
            .save_measurement_system(MeasurementSystem::UsCustomary)
            .await
            .unwrap();
        let system = store.load_measurement_system().await.unwrap();
        assert_eq!(system, MeasurementSystem::UsCustomary);

        store
            .save_measurement_system(MeasurementSystem::Metric)
            .await
            .unwrap();
        let system = store.load_measurement_system().await.unwrap();
        assert_eq!(system, MeasurementSystem::Metric);
    }

    #[tokio::test]
    async fn test_stored_string_is_us_customary_spelling() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let store = FilePreferenceStore::new(&path);

        store
            .save_measurement_system(MeasurementSystem::UsCustomary)
            .await
            .unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.contains("USCustomary"));
    }

    #[tokio::test]
    async fn test_unknown_stored_system_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        tokio::fs::write(&path, "measurement_system = \"Imperial\"\n")
            .await
            .unwrap();

        let store = FilePreferenceStore::new(&path);
        assert!(store.load_measurement_system().await.is_err());
    }
}
