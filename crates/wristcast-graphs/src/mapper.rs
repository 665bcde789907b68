//! Min/max normalizing coordinate mapper for temperature series.

use crate::types::Point;
use tracing::debug;
use wristcast_common::{Result, WristcastError};

/// Maps an ordered sample series onto canvas coordinates.
///
/// The mapper is a pure transform: it owns no state and is invoked
/// fresh on every redraw. Samples are spaced evenly across the canvas
/// width; values are normalized against the series min/max so the
/// minimum lands on the bottom edge and the maximum on the top edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphCoordinateMapper;

impl GraphCoordinateMapper {
    /// Creates a mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps `samples` into canvas space.
    ///
    /// For index `i` of `n` samples, `x = width * i / (n - 1)`; a
    /// single sample sits at `x = 0`. Vertically,
    /// `y = height - height * (value - min) / (max - min)`, clamped
    /// into `[0, height]`. When every sample is equal there is no
    /// spread to normalize against and all points sit on the vertical
    /// midpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WristcastError::EmptySeries`] for an empty slice and
    /// [`WristcastError::Graph`] for non-finite samples or non-positive
    /// canvas dimensions.
    #[allow(clippy::cast_precision_loss)]
    pub fn map_to_points(&self, samples: &[f64], width: f64, height: f64) -> Result<Vec<Point>> {
        if samples.is_empty() {
            return Err(WristcastError::empty_series("coordinate mapping"));
        }
        if let Some(bad) = samples.iter().find(|value| !value.is_finite()) {
            return Err(WristcastError::graph(format!(
                "sample values must be finite, got {bad}"
            )));
        }
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
            return Err(WristcastError::graph(format!(
                "canvas dimensions must be positive and finite, got {width}x{height}"
            )));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in samples {
            min = min.min(value);
            max = max.max(value);
        }
        let spread = max - min;

        let n = samples.len();
        let points = samples
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let x = if n > 1 {
                    width * i as f64 / (n - 1) as f64
                } else {
                    0.0
                };
                let y = if spread == 0.0 {
                    height / 2.0
                } else {
                    (height - height * (value - min) / spread).clamp(0.0, height)
                };
                Point::new(x, y)
            })
            .collect();

        debug!(
            samples = n,
            width, height, "mapped sample series to canvas points"
        );
        Ok(points)
    }
}
