//! Main entry point for Wristcast.

use std::env;
use std::sync::Arc;
use tracing::{error, info};
use wristcast_app::WristcastApp;
use wristcast_common::logging::{init_logging, LoggingConfig};
use wristcast_common::{Result, WristcastError};
use wristcast_config::{defaults, ConfigLoader, FilePreferenceStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = env::var("WRISTCAST_CONFIG")
        .unwrap_or_else(|_| defaults::DEFAULT_CONFIG_FILE.to_string());
    let config = ConfigLoader::new(&config_path).load().await?;

    init_logging(LoggingConfig {
        level: config.logging.level.clone(),
        file_path: config.logging.file.clone(),
        ..LoggingConfig::default()
    })
    .map_err(|err| WristcastError::config(format!("failed to initialize logging: {err}")))?;

    info!(config = %config_path, "starting Wristcast");

    let preferences_path = env::var("WRISTCAST_PREFERENCES")
        .unwrap_or_else(|_| defaults::DEFAULT_PREFERENCES_FILE.to_string());
    let preferences = Arc::new(FilePreferenceStore::new(&preferences_path));

    let app = WristcastApp::new(config, preferences).await?;

    let screen = match app.forecast_screen().await {
        Ok(screen) => screen,
        Err(err) => {
            error!("failed to bind forecast screen: {err}");
            return Err(err);
        }
    };
    info!(
        temperature = %screen.temperature,
        condition = %screen.condition_name,
        long_term_rows = screen.long_term_rows.len(),
        "bound forecast screen"
    );

    if let Ok(preview_path) = env::var("WRISTCAST_PREVIEW") {
        tokio::fs::write(&preview_path, &screen.sparkline_png).await?;
        info!(path = %preview_path, "wrote sparkline preview");
    }

    Ok(())
}
