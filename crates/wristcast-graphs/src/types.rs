//! Geometry and styling types for the sparkline pipeline.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use wristcast_common::{Result, WristcastError};

/// A mapped point in canvas space.
///
/// `y` is measured from the top edge, matching the drawing backend's
/// pixel orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position, `0.0` at the left edge.
    pub x: f64,
    /// Vertical position, `0.0` at the top edge.
    pub y: f64,
}

impl Point {
    /// Creates a point from canvas coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas dimensions in device-independent points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Canvas width, must be positive and finite.
    pub width: f64,
    /// Canvas height, must be positive and finite.
    pub height: f64,
}

impl CanvasSize {
    /// Creates a canvas size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Checks that both dimensions are positive finite numbers.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(WristcastError::graph(format!(
                "canvas width must be positive and finite, got {}",
                self.width
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(WristcastError::graph(format!(
                "canvas height must be positive and finite, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(312.0, 88.0)
    }
}

/// Stroke and background styling for the sparkline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStyle {
    /// Polyline stroke color as a `"#RRGGBB"` string.
    pub line_color: String,
    /// Canvas background color as a `"#RRGGBB"` string.
    pub background_color: String,
    /// Polyline stroke width in pixels.
    pub line_width: u32,
}

impl GraphStyle {
    /// The stroke color parsed to an [`RGBColor`].
    pub fn line_rgb(&self) -> Result<RGBColor> {
        parse_hex_color(&self.line_color)
    }

    /// The background color parsed to an [`RGBColor`].
    pub fn background_rgb(&self) -> Result<RGBColor> {
        parse_hex_color(&self.background_color)
    }
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            line_color: "#1f77b4".to_string(),
            background_color: "#000000".to_string(),
            line_width: 2,
        }
    }
}

/// Parses a `"#RRGGBB"` color string into an [`RGBColor`].
pub fn parse_hex_color(color: &str) -> Result<RGBColor> {
    let hex = color
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| WristcastError::graph(format!("invalid hex color: {color}")))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| WristcastError::graph(format!("invalid hex color: {color}")))
    };

    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
