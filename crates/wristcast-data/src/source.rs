//! Forecast provider trait and the canned data source.
//!
//! The companion ships with a fixed forecast dataset rather than a
//! network layer. The provider trait is the seam the screen layer binds
//! against, so tests and future data sources can substitute their own
//! implementation.

use crate::conditions::WeatherCondition;
use crate::record::WeatherRecord;
use chrono::Weekday;
use tracing::debug;
use wristcast_common::MeasurementSystem;

/// Read access to forecast records for the screen layer.
///
/// Implementations are constructed for one measurement system; every
/// record they hand out is formatted for that system.
pub trait WeatherProvider: Send + Sync {
    /// System every record's display strings are formatted for.
    fn measurement_system(&self) -> MeasurementSystem;

    /// The current conditions record.
    fn current(&self) -> &WeatherRecord;

    /// Ordered short-term series, one record per three-hour segment.
    fn short_term(&self) -> &[WeatherRecord];

    /// Ordered long-term series, one record per day.
    fn long_term(&self) -> &[WeatherRecord];

    /// Short-term temperatures in series order, for graphing.
    fn short_term_temperatures(&self) -> Vec<f64> {
        self.short_term()
            .iter()
            .map(WeatherRecord::temperature)
            .collect()
    }
}

/// Daily high shared by the current record and short-term segments.
const DAY_HIGH_C: f64 = 21.6;
/// Daily low shared by the current record and short-term segments.
const DAY_LOW_C: f64 = 12.4;

/// Short-term segments: start hour, temperature, feels-like, wind,
/// condition. Three-hour spacing starting at 06:00.
const SHORT_TERM_SEGMENTS: [(u32, f64, f64, f64, WeatherCondition); 6] = [
    (6, 12.4, 10.8, 9.0, WeatherCondition::Fog),
    (9, 15.1, 14.0, 11.0, WeatherCondition::PartlyCloudy),
    (12, 19.3, 18.5, 14.0, WeatherCondition::Clear),
    (15, 21.6, 21.0, 16.0, WeatherCondition::Clear),
    (18, 20.2, 19.4, 12.0, WeatherCondition::PartlyCloudy),
    (21, 16.8, 15.5, 8.0, WeatherCondition::Cloudy),
];

/// Long-term days: temperature, feels-like, wind, high, low, condition.
const LONG_TERM_DAYS: [(f64, f64, f64, f64, f64, WeatherCondition); 5] = [
    (19.0, 18.1, 12.0, 21.6, 12.4, WeatherCondition::PartlyCloudy),
    (16.4, 15.0, 18.0, 18.2, 10.9, WeatherCondition::Rain),
    (14.8, 13.2, 22.0, 16.1, 9.3, WeatherCondition::Thunderstorms),
    (17.5, 16.8, 10.0, 19.7, 11.2, WeatherCondition::Cloudy),
    (20.9, 20.3, 7.0, 23.0, 13.6, WeatherCondition::Clear),
];

/// Weekday label of the first long-term record.
const FIRST_LONG_TERM_DAY: Weekday = Weekday::Wed;

/// Canned forecast data source.
///
/// Holds one current record, the short-term series, and the long-term
/// series, all formatted for the system it was constructed with.
/// Switching systems means building a new source.
#[derive(Debug, Clone)]
pub struct WeatherDataSource {
    system: MeasurementSystem,
    current: WeatherRecord,
    short_term: Vec<WeatherRecord>,
    long_term: Vec<WeatherRecord>,
}

impl WeatherDataSource {
    /// Builds the canned forecast dataset formatted for `system`.
    #[must_use]
    pub fn new(system: MeasurementSystem) -> Self {
        let current = WeatherRecord {
            interval: "Now".to_string(),
            temperature_c: 18.2,
            feels_like_c: 16.9,
            wind_kmh: 13.0,
            high_c: DAY_HIGH_C,
            low_c: DAY_LOW_C,
            condition: WeatherCondition::PartlyCloudy,
            system,
        };

        let short_term: Vec<WeatherRecord> = SHORT_TERM_SEGMENTS
            .iter()
            .map(
                |&(hour, temperature_c, feels_like_c, wind_kmh, condition)| WeatherRecord {
                    interval: format!("{hour:02}:00"),
                    temperature_c,
                    feels_like_c,
                    wind_kmh,
                    high_c: DAY_HIGH_C,
                    low_c: DAY_LOW_C,
                    condition,
                    system,
                },
            )
            .collect();

        let mut day = FIRST_LONG_TERM_DAY;
        let long_term: Vec<WeatherRecord> = LONG_TERM_DAYS
            .iter()
            .map(
                |&(temperature_c, feels_like_c, wind_kmh, high_c, low_c, condition)| {
                    let record = WeatherRecord {
                        interval: day.to_string(),
                        temperature_c,
                        feels_like_c,
                        wind_kmh,
                        high_c,
                        low_c,
                        condition,
                        system,
                    };
                    day = day.succ();
                    record
                },
            )
            .collect();

        debug!(
            %system,
            short_term_records = short_term.len(),
            long_term_records = long_term.len(),
            "built canned forecast dataset"
        );

        Self {
            system,
            current,
            short_term,
            long_term,
        }
    }
}

impl Default for WeatherDataSource {
    fn default() -> Self {
        Self::new(MeasurementSystem::default())
    }
}

impl WeatherProvider for WeatherDataSource {
    fn measurement_system(&self) -> MeasurementSystem {
        self.system
    }

    fn current(&self) -> &WeatherRecord {
        &self.current
    }

    fn short_term(&self) -> &[WeatherRecord] {
        &self.short_term
    }

    fn long_term(&self) -> &[WeatherRecord] {
        &self.long_term
    }
}
