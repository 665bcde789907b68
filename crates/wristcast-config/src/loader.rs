//! Configuration loading and persistence with atomic file operations.

use crate::schema::AppConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use wristcast_common::Result;

/// Configuration loader with atomic file operations.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this loader reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates configuration from file.
    ///
    /// A missing file yields the default configuration.
    pub async fn load(&self) -> Result<AppConfig> {
        let config = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                debug!(path = %self.path.display(), "loading configuration");
                toml::from_str(&contents)?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no configuration file, using defaults");
                AppConfig::default()
            }
            Err(err) => return Err(err.into()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to file atomically.
    ///
    /// The file is written to a sibling temporary path and renamed into
    /// place so readers never observe a partial write.
    pub async fn save(&self, config: &AppConfig) -> Result<()> {
        config.validate()?;

        let contents = toml::to_string_pretty(config)?;
        let tmp_path = self.path.with_extension("toml.tmp");

        tokio::fs::write(&tmp_path, contents).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}
