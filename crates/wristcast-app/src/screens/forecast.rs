//! Main forecast screen view-model.

use tracing::debug;
use wristcast_common::Result;
use wristcast_data::{WeatherProvider, WeatherRecord};
use wristcast_graphs::{CanvasSize, GraphCoordinateMapper, GraphRenderer, GraphStyle};

/// One row of the long-term forecast table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongTermRow {
    /// Weekday label.
    pub interval: String,
    /// Formatted temperature.
    pub temperature: String,
    /// Condition display name.
    pub condition_name: String,
    /// Condition icon identifier.
    pub condition_icon: String,
}

/// Bound state of the main forecast screen.
///
/// Everything the screen shows is a pre-formatted string or encoded
/// image; nothing downstream needs to know about units or raw values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastScreen {
    /// Current temperature.
    pub temperature: String,
    /// Current feels-like temperature.
    pub feels_like: String,
    /// Current wind speed.
    pub wind: String,
    /// Current condition display name.
    pub condition_name: String,
    /// Current condition icon identifier.
    pub condition_icon: String,
    /// Three-segment short-term strip, each `"{interval}\n{temperature}"`.
    pub short_term_strip: Vec<String>,
    /// One row per long-term record.
    pub long_term_rows: Vec<LongTermRow>,
    /// Short-term temperature sparkline as PNG bytes.
    pub sparkline_png: Vec<u8>,
}

impl ForecastScreen {
    /// Binds the screen from the provider's records and renders the
    /// short-term sparkline.
    ///
    /// # Errors
    ///
    /// Propagates mapper errors (empty or non-finite short-term series)
    /// and renderer errors.
    pub async fn bind(
        provider: &dyn WeatherProvider,
        renderer: &dyn GraphRenderer,
        canvas: CanvasSize,
        style: &GraphStyle,
    ) -> Result<Self> {
        let current = provider.current();

        let temperatures = provider.short_term_temperatures();
        let mapper = GraphCoordinateMapper::new();
        let points = mapper.map_to_points(&temperatures, canvas.width, canvas.height)?;
        let sparkline_png = renderer.render_to_bytes(&points, canvas, style).await?;

        let short_term_strip = short_term_strip(provider.short_term());
        let long_term_rows = provider
            .long_term()
            .iter()
            .map(|record| LongTermRow {
                interval: record.interval_string().to_string(),
                temperature: record.temperature_string(),
                condition_name: record.condition_name().to_string(),
                condition_icon: record.condition_icon().to_string(),
            })
            .collect();

        debug!(
            system = %provider.measurement_system(),
            "bound forecast screen"
        );

        Ok(Self {
            temperature: current.temperature_string(),
            feels_like: current.feels_like_string(),
            wind: current.wind_string(),
            condition_name: current.condition_name().to_string(),
            condition_icon: current.condition_icon().to_string(),
            short_term_strip,
            long_term_rows,
            sparkline_png,
        })
    }
}

/// Picks the strip segments from positions `0`, `len/2`, and `len-1`
/// of the short-term series.
fn short_term_strip(records: &[WeatherRecord]) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }
    let picks = [0, records.len() / 2, records.len() - 1];
    picks
        .iter()
        .map(|&i| {
            let record = &records[i];
            format!(
                "{}\n{}",
                record.interval_string(),
                record.temperature_string()
            )
        })
        .collect()
}
