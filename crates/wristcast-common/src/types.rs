//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::WristcastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit system used to format forecast values for display.
///
/// Exactly two systems are recognized. The serialized names match the
/// strings persisted by the preference store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MeasurementSystem {
    /// Celsius temperatures and km/h wind speeds.
    #[default]
    Metric,
    /// Fahrenheit temperatures and mph wind speeds.
    #[serde(rename = "USCustomary")]
    UsCustomary,
}

impl MeasurementSystem {
    /// The canonical name used for persistence.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::UsCustomary => "USCustomary",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementSystem {
    type Err = WristcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Metric" => Ok(Self::Metric),
            "USCustomary" => Ok(Self::UsCustomary),
            other => Err(WristcastError::preference(format!(
                "unknown measurement system: {other}"
            ))),
        }
    }
}

/// Index of a forecast record within an ordered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordIndex(pub usize);

impl fmt::Display for RecordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for RecordIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_index_display() {
        assert_eq!(RecordIndex(3).to_string(), "3");
        assert_eq!(RecordIndex::from(7), RecordIndex(7));
    }

    #[test]
    fn test_measurement_system_round_trip() {
        assert_eq!(MeasurementSystem::Metric.as_str(), "Metric");
        assert_eq!(MeasurementSystem::UsCustomary.as_str(), "USCustomary");

        assert_eq!(
            "Metric".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::Metric
        );
        assert_eq!(
            "USCustomary".parse::<MeasurementSystem>().unwrap(),
            MeasurementSystem::UsCustomary
        );
        assert!("Imperial".parse::<MeasurementSystem>().is_err());
    }

    #[test]
    fn test_measurement_system_default() {
        assert_eq!(MeasurementSystem::default(), MeasurementSystem::Metric);
    }
}
