//! Configuration validation with field-tagged errors.

use crate::schema::AppConfig;
use wristcast_common::{Result, WristcastError};

/// Validates an [`AppConfig`], returning the first violation found.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if !config.canvas.width.is_finite() || config.canvas.width <= 0.0 {
        return Err(WristcastError::validation_field(
            "canvas width must be a positive finite number",
            "canvas.width",
        ));
    }

    if !config.canvas.height.is_finite() || config.canvas.height <= 0.0 {
        return Err(WristcastError::validation_field(
            "canvas height must be a positive finite number",
            "canvas.height",
        ));
    }

    if config.graph.line_width == 0 {
        return Err(WristcastError::validation_field(
            "line width must be at least 1",
            "graph.line_width",
        ));
    }

    validate_hex_color(&config.graph.line_color, "graph.line_color")?;
    validate_hex_color(&config.graph.background_color, "graph.background_color")?;

    if config.logging.level.is_empty() {
        return Err(WristcastError::validation_field(
            "log level cannot be empty",
            "logging.level",
        ));
    }

    Ok(())
}

/// Validates a "#RRGGBB" color string.
fn validate_hex_color(color: &str, field: &str) -> Result<()> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        Ok(())
    } else {
        Err(WristcastError::validation_field(
            format!("invalid hex color: {color}"),
            field,
        ))
    }
}
