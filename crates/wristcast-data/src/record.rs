//! Forecast record with pre-formatted display strings.

use crate::conditions::WeatherCondition;
use crate::units::{
    convert_temperature, convert_wind_speed, round_display, temperature_unit, wind_unit,
};
use serde::{Deserialize, Serialize};
use wristcast_common::MeasurementSystem;

/// One forecast entry.
///
/// Raw values are stored in metric base units; the display accessors
/// convert and format them for the record's measurement system. The raw
/// temperature stays numeric so the graph pipeline can consume it
/// without re-parsing a formatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Interval label, e.g. `"09:00"` for a short-term segment or
    /// `"Tue"` for a long-term day.
    pub interval: String,
    /// Air temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Apparent temperature in degrees Celsius.
    pub feels_like_c: f64,
    /// Wind speed in kilometres per hour.
    pub wind_kmh: f64,
    /// Daily high in degrees Celsius.
    pub high_c: f64,
    /// Daily low in degrees Celsius.
    pub low_c: f64,
    /// Sky condition.
    pub condition: WeatherCondition,
    /// System the display accessors format for.
    pub system: MeasurementSystem,
}

impl WeatherRecord {
    /// Air temperature converted to the record's system, unrounded.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        convert_temperature(self.temperature_c, self.system)
    }

    /// Formatted air temperature, e.g. `"18°C"` or `"65°F"`.
    #[must_use]
    pub fn temperature_string(&self) -> String {
        self.format_temperature(self.temperature_c)
    }

    /// Formatted apparent temperature.
    #[must_use]
    pub fn feels_like_string(&self) -> String {
        self.format_temperature(self.feels_like_c)
    }

    /// Formatted wind speed, e.g. `"13 km/h"` or `"8 mph"`.
    #[must_use]
    pub fn wind_string(&self) -> String {
        let speed = convert_wind_speed(self.wind_kmh, self.system);
        format!("{} {}", round_display(speed), wind_unit(self.system))
    }

    /// The interval label this record covers.
    #[must_use]
    pub fn interval_string(&self) -> &str {
        &self.interval
    }

    /// Human-readable condition name.
    #[must_use]
    pub fn condition_name(&self) -> &'static str {
        self.condition.display_name()
    }

    /// Icon asset identifier for the condition.
    #[must_use]
    pub fn condition_icon(&self) -> &'static str {
        self.condition.icon_name()
    }

    /// Formatted daily high temperature.
    #[must_use]
    pub fn high_string(&self) -> String {
        self.format_temperature(self.high_c)
    }

    /// Formatted daily low temperature.
    #[must_use]
    pub fn low_string(&self) -> String {
        self.format_temperature(self.low_c)
    }

    /// Returns a copy of this record formatted for a different system.
    ///
    /// Raw metric values are carried over unchanged.
    #[must_use]
    pub fn with_system(&self, system: MeasurementSystem) -> Self {
        Self {
            system,
            ..self.clone()
        }
    }

    fn format_temperature(&self, celsius: f64) -> String {
        let value = convert_temperature(celsius, self.system);
        format!("{}{}", round_display(value), temperature_unit(self.system))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wristcast_common::test_utils::assert_approx_eq;

    fn sample_record(system: MeasurementSystem) -> WeatherRecord {
        WeatherRecord {
            interval: "09:00".to_string(),
            temperature_c: 18.2,
            feels_like_c: 16.9,
            wind_kmh: 13.0,
            high_c: 22.4,
            low_c: 11.8,
            condition: WeatherCondition::PartlyCloudy,
            system,
        }
    }

    #[test]
    fn test_metric_display_strings() {
        let record = sample_record(MeasurementSystem::Metric);

        assert_eq!(record.temperature_string(), "18°C");
        assert_eq!(record.feels_like_string(), "17°C");
        assert_eq!(record.wind_string(), "13 km/h");
        assert_eq!(record.high_string(), "22°C");
        assert_eq!(record.low_string(), "12°C");
        assert_eq!(record.interval_string(), "09:00");
        assert_eq!(record.condition_name(), "Partly Cloudy");
        assert_eq!(record.condition_icon(), "partly_cloudy");
    }

    #[test]
    fn test_us_customary_display_strings() {
        let record = sample_record(MeasurementSystem::UsCustomary);

        // 18.2 °C = 64.76 °F, 16.9 °C = 62.42 °F
        assert_eq!(record.temperature_string(), "65°F");
        assert_eq!(record.feels_like_string(), "62°F");
        // 13.0 km/h = 8.08 mph
        assert_eq!(record.wind_string(), "8 mph");
        // 22.4 °C = 72.32 °F, 11.8 °C = 53.24 °F
        assert_eq!(record.high_string(), "72°F");
        assert_eq!(record.low_string(), "53°F");
    }

    #[test]
    fn test_raw_temperature_follows_system() {
        let metric = sample_record(MeasurementSystem::Metric);
        assert_approx_eq(metric.temperature(), 18.2, 1e-9);

        let imperial = sample_record(MeasurementSystem::UsCustomary);
        assert_approx_eq(imperial.temperature(), 64.76, 1e-9);
    }

    #[test]
    fn test_with_system_keeps_raw_values() {
        let metric = sample_record(MeasurementSystem::Metric);
        let imperial = metric.with_system(MeasurementSystem::UsCustomary);

        assert_eq!(imperial.system, MeasurementSystem::UsCustomary);
        assert_approx_eq(imperial.temperature_c, metric.temperature_c, 1e-9);
        assert_eq!(imperial.interval, metric.interval);
        assert_eq!(imperial.temperature_string(), "65°F");
    }

    #[test]
    fn test_half_up_rounding_in_display() {
        let mut record = sample_record(MeasurementSystem::Metric);
        record.temperature_c = 20.5;
        assert_eq!(record.temperature_string(), "21°C");

        record.temperature_c = -0.5;
        assert_eq!(record.temperature_string(), "0°C");
    }
}
