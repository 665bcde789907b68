//! Default values for the Wristcast configuration.

/// Default canvas width for the short-term sparkline, in device-independent points.
pub const DEFAULT_CANVAS_WIDTH: f64 = 312.0;

/// Default canvas height for the short-term sparkline, in device-independent points.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 88.0;

/// Default stroke width for the sparkline polyline, in pixels.
pub const DEFAULT_LINE_WIDTH: u32 = 2;

/// Default sparkline stroke color (hex).
pub const DEFAULT_LINE_COLOR: &str = "#1f77b4";

/// Default sparkline background color (hex). Watch screens are black.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#000000";

/// Default log level filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "wristcast.toml";

/// Default preference file name.
pub const DEFAULT_PREFERENCES_FILE: &str = "preferences.toml";
