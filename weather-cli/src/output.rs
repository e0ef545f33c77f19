//! Report sink: stdout or file, compact or pretty.

use std::{fs, path::Path};

use weather_core::{WeatherError, WeatherReport};

/// Serialize the report and write it to `path`, or to stdout when no path is
/// given. The document is fully rendered before anything is written, so a
/// failure never leaves partial output behind.
pub fn write_report(
    report: &WeatherReport,
    path: Option<&Path>,
    pretty: bool,
) -> Result<(), WeatherError> {
    let json = render(report, pretty)?;

    match path {
        Some(path) => {
            fs::write(path, json.as_bytes()).map_err(|err| {
                WeatherError::Output(format!("failed to write {}: {err}", path.display()))
            })?;
            // Confirmation goes to stderr so stdout stays a clean JSON channel.
            eprintln!("Weather data saved to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn render(report: &WeatherReport, pretty: bool) -> Result<String, WeatherError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };

    rendered.map_err(|err| WeatherError::Output(format!("failed to encode report: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::model::{
        ConditionsReport, Coordinates, LocationReport, SunReport, TemperatureReport, WindReport,
    };

    fn sample_report() -> WeatherReport {
        WeatherReport {
            location: LocationReport {
                city: "London".to_string(),
                country: "GB".to_string(),
                coordinates: Coordinates {
                    lat: Some(51.5085),
                    lon: Some(-0.1257),
                },
            },
            weather: ConditionsReport {
                main: "Clear".to_string(),
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
                temperature: TemperatureReport {
                    current: 15.5,
                    feels_like: Some(14.8),
                    min: Some(14.0),
                    max: Some(16.0),
                    unit: "°C".to_string(),
                },
                pressure: "1012 hPa".to_string(),
                humidity: "72%".to_string(),
                visibility: "10.0 km".to_string(),
                wind: WindReport {
                    speed: "3.6 m/s".to_string(),
                    degree: Some(200),
                    gust: None,
                },
                clouds: "0%".to_string(),
                rain: None,
                snow: None,
                sun: SunReport {
                    sunrise: Some(1_619_950_000),
                    sunset: Some(1_620_000_000),
                },
                timezone: Some(3600),
                timestamp: Some(1_620_000_000),
            },
        }
    }

    #[test]
    fn file_round_trip_is_structurally_identical() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("weather.json");
        let report = sample_report();

        write_report(&report, Some(&path), true).expect("write succeeds");

        let written = fs::read_to_string(&path).expect("file exists");
        let read_back: serde_json::Value = serde_json::from_str(&written).expect("valid json");

        assert_eq!(
            read_back,
            serde_json::to_value(&report).expect("report serializes")
        );
    }

    #[test]
    fn pretty_output_is_indented() {
        let compact = render(&sample_report(), false).expect("compact");
        let pretty = render(&sample_report(), true).expect("pretty");

        assert!(!compact.contains('\n'));
        assert!(pretty.contains("\n  "));
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("weather.json");
        fs::write(&path, "stale contents").expect("seed file");

        write_report(&sample_report(), Some(&path), false).expect("write succeeds");

        let written = fs::read_to_string(&path).expect("file exists");
        assert!(written.starts_with('{'));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn missing_directory_is_an_output_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("no-such-dir").join("weather.json");

        let err = write_report(&sample_report(), Some(&path), false).unwrap_err();
        assert!(matches!(err, WeatherError::Output(_)));
    }
}
