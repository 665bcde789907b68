//! Configuration schema definitions using serde with validation support.

use crate::defaults;
use serde::{Deserialize, Serialize};
use wristcast_common::{MeasurementSystem, Result};

/// Main configuration structure for Wristcast.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Unit system configuration.
    pub units: UnitsConfig,
    /// Sparkline canvas configuration.
    pub canvas: CanvasConfig,
    /// Sparkline styling configuration.
    pub graph: GraphStyleConfig,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Unit system configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    /// Measurement system used to format forecast values.
    pub measurement_system: MeasurementSystem,
}

/// Canvas dimensions for the short-term sparkline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in device-independent points.
    pub width: f64,
    /// Canvas height in device-independent points.
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: defaults::DEFAULT_CANVAS_WIDTH,
            height: defaults::DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Styling configuration for the sparkline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyleConfig {
    /// Stroke color (hex, e.g. "#1f77b4").
    pub line_color: String,
    /// Background color (hex).
    pub background_color: String,
    /// Stroke width in pixels.
    pub line_width: u32,
}

impl Default for GraphStyleConfig {
    fn default() -> Self {
        Self {
            line_color: defaults::DEFAULT_LINE_COLOR.to_string(),
            background_color: defaults::DEFAULT_BACKGROUND_COLOR.to_string(),
            line_width: defaults::DEFAULT_LINE_WIDTH,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level filter (e.g., "info", "debug").
    pub level: String,
    /// Optional log file path.
    pub file: Option<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::validator::validate_config(self)
    }
}
