//! Detail screen view-model for a selected long-term record.

use crate::navigation::DetailContext;
use tracing::debug;
use wristcast_common::{Result, WristcastError};

/// Bound state of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailScreen {
    /// Screen title, the record's interval label.
    pub title: String,
    /// Formatted temperature.
    pub temperature: String,
    /// Condition display name.
    pub condition_name: String,
    /// Condition icon identifier.
    pub condition_icon: String,
    /// Formatted feels-like temperature.
    pub feels_like: String,
    /// Formatted wind speed.
    pub wind: String,
    /// Formatted daily high.
    pub high: String,
    /// Formatted daily low.
    pub low: String,
}

impl DetailScreen {
    /// Binds the screen from the long-term record the context points at.
    ///
    /// # Errors
    ///
    /// Returns a [`WristcastError::Validation`] error when the context's
    /// record index is out of range for the provider's long-term series.
    pub fn bind(context: &DetailContext) -> Result<Self> {
        let records = context.provider.long_term();
        let index = context.record_index.0;
        let record = records.get(index).ok_or_else(|| {
            WristcastError::validation_field(
                format!(
                    "long-term record index {index} out of range for {} records",
                    records.len()
                ),
                "record_index",
            )
        })?;

        debug!(%index, interval = record.interval_string(), "bound detail screen");

        Ok(Self {
            title: record.interval_string().to_string(),
            temperature: record.temperature_string(),
            condition_name: record.condition_name().to_string(),
            condition_icon: record.condition_icon().to_string(),
            feels_like: record.feels_like_string(),
            wind: record.wind_string(),
            high: record.high_string(),
            low: record.low_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wristcast_common::MeasurementSystem;
    use wristcast_data::WeatherDataSource;

    fn metric_context(index: usize) -> DetailContext {
        DetailContext::new(
            Arc::new(WeatherDataSource::new(MeasurementSystem::Metric)),
            index,
        )
    }

    #[test]
    fn test_bind_first_long_term_record() {
        let screen = DetailScreen::bind(&metric_context(0)).unwrap();

        assert_eq!(screen.title, "Wed");
        assert_eq!(screen.temperature, "19°C");
        assert_eq!(screen.condition_name, "Partly Cloudy");
        assert_eq!(screen.condition_icon, "partly_cloudy");
        assert_eq!(screen.high, "22°C");
        assert_eq!(screen.low, "12°C");
    }

    #[test]
    fn test_bind_last_long_term_record() {
        let screen = DetailScreen::bind(&metric_context(4)).unwrap();

        assert_eq!(screen.title, "Sun");
        assert_eq!(screen.temperature, "21°C");
        assert_eq!(screen.condition_name, "Clear");
    }

    #[test]
    fn test_out_of_range_index_is_validation_error() {
        let err = DetailScreen::bind(&metric_context(5)).unwrap_err();
        assert!(matches!(err, WristcastError::Validation { .. }));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_us_customary_detail_bindings() {
        let context = DetailContext::new(
            Arc::new(WeatherDataSource::new(MeasurementSystem::UsCustomary)),
            1,
        );
        let screen = DetailScreen::bind(&context).unwrap();

        assert_eq!(screen.title, "Thu");
        assert!(screen.temperature.ends_with("°F"));
        assert!(screen.wind.ends_with("mph"));
    }
}
