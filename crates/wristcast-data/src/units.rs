//! Unit conversions between the metric base data and display systems.
//!
//! All forecast fixtures are stored in metric units. Records convert on
//! the way out, so raw values stay untouched and display rounding never
//! feeds back into the data.

pub use wristcast_common::MeasurementSystem;

/// Kilometres per hour in one mile per hour.
pub const KMH_PER_MPH: f64 = 1.609_344;

/// Converts degrees Celsius to degrees Fahrenheit.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts kilometres per hour to miles per hour.
#[must_use]
pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh / KMH_PER_MPH
}

/// Converts a metric temperature into the given system.
#[must_use]
pub fn convert_temperature(celsius: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => celsius,
        MeasurementSystem::UsCustomary => celsius_to_fahrenheit(celsius),
    }
}

/// Converts a metric wind speed into the given system.
#[must_use]
pub fn convert_wind_speed(kmh: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => kmh,
        MeasurementSystem::UsCustomary => kmh_to_mph(kmh),
    }
}

/// Temperature unit suffix for the given system.
#[must_use]
pub fn temperature_unit(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "°C",
        MeasurementSystem::UsCustomary => "°F",
    }
}

/// Wind speed unit suffix for the given system.
#[must_use]
pub fn wind_unit(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "km/h",
        MeasurementSystem::UsCustomary => "mph",
    }
}

/// Rounds a display value half-up to the nearest whole unit.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_display(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
