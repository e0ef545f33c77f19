use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unit system requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Wire value for the provider's `units` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Label attached to the temperature block of the report.
    pub fn temperature_label(self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }

    /// Suffix attached to the wind speed of the report.
    pub fn wind_speed_label(self) -> &'static str {
        match self {
            Units::Metric => "m/s",
            Units::Imperial => "mph",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved invocation: where to look, how to label, where to write.
/// Immutable once constructed by the CLI.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub location: String,
    pub country: Option<String>,
    pub units: Units,
    pub api_key: String,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

/// The document this tool emits.
///
/// Optional fields serialize as explicit `null` rather than being omitted,
/// so every report carries the same set of keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: LocationReport,
    pub weather: ConditionsReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReport {
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionsReport {
    pub main: String,
    pub description: String,
    pub icon: String,
    pub temperature: TemperatureReport,
    pub pressure: String,
    pub humidity: String,
    pub visibility: String,
    pub wind: WindReport,
    pub clouds: String,
    /// Precipitation volume block as returned by the provider, e.g. `{"1h": 0.25}`.
    pub rain: Option<Value>,
    pub snow: Option<Value>,
    pub sun: SunReport,
    /// Offset from UTC in seconds.
    pub timezone: Option<i64>,
    /// Observation time, epoch seconds.
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureReport {
    pub current: f64,
    pub feels_like: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindReport {
    /// Formatted with the unit suffix, e.g. "3.6 m/s".
    pub speed: String,
    pub degree: Option<i64>,
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunReport {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}
