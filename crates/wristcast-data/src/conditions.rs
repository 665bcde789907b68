//! Weather condition taxonomy with display names and icon identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sky and precipitation condition attached to a forecast record.
///
/// Each condition carries a human-readable name and a stable icon asset
/// identifier; screens bind both without further mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    /// Clear sky.
    Clear,
    /// Partly cloudy.
    PartlyCloudy,
    /// Overcast.
    Cloudy,
    /// Rain or showers.
    Rain,
    /// Thunderstorms.
    Thunderstorms,
    /// Snowfall.
    Snow,
    /// Fog or mist.
    Fog,
}

impl WeatherCondition {
    /// Human-readable condition name shown on screens.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Rain",
            Self::Thunderstorms => "Thunderstorms",
            Self::Snow => "Snow",
            Self::Fog => "Fog",
        }
    }

    /// Stable identifier of the icon asset for this condition.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly_cloudy",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Thunderstorms => "thunderstorms",
            Self::Snow => "snow",
            Self::Fog => "fog",
        }
    }

    /// All conditions, in declaration order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Clear,
            Self::PartlyCloudy,
            Self::Cloudy,
            Self::Rain,
            Self::Thunderstorms,
            Self::Snow,
            Self::Fog,
        ]
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_matches_display_name() {
        for condition in WeatherCondition::all() {
            assert_eq!(condition.to_string(), condition.display_name());
        }
    }

    #[test]
    fn test_icon_names_are_distinct() {
        let icons: HashSet<_> = WeatherCondition::all()
            .iter()
            .map(|c| c.icon_name())
            .collect();
        assert_eq!(icons.len(), WeatherCondition::all().len());
    }

    #[test]
    fn test_icon_names_are_asset_safe() {
        for condition in WeatherCondition::all() {
            let icon = condition.icon_name();
            assert!(!icon.is_empty());
            assert!(icon
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&WeatherCondition::PartlyCloudy).unwrap();
        assert_eq!(json, "\"PartlyCloudy\"");
        let back: WeatherCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WeatherCondition::PartlyCloudy);
    }
}
