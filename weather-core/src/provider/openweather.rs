use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::WeatherError,
    model::{
        ConditionsReport, Coordinates, LocationReport, SunReport, TemperatureReport, Units,
        WeatherQuery, WeatherReport, WindReport,
    },
};

use super::WeatherProvider;

/// OpenWeatherMap current-conditions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at a different endpoint; tests use this with a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client"),
        }
    }

    /// Outbound query parameters for `query`. No side effects.
    fn request_params(&self, query: &WeatherQuery) -> [(&'static str, String); 3] {
        [
            ("q", location_param(&query.location, query.country.as_deref())),
            ("appid", self.api_key.clone()),
            ("units", query.units.as_str().to_string()),
        ]
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<OwResponse, WeatherError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&self.request_params(query))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Transport(format!(
                "OpenWeather request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        serde_json::from_str(&body).map_err(|err| WeatherError::Malformed(err.to_string()))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let raw = self.fetch_current(query).await?;
        report_from_raw(raw, query.units)
    }
}

/// `q` parameter: `City` or `City,CC`.
fn location_param(location: &str, country: Option<&str>) -> String {
    match country {
        Some(code) => format!("{location},{code}"),
        None => location.to_string(),
    }
}

/// Raw current-conditions payload. Every field is optional here; the
/// transformer decides what the report cannot be built without.
#[derive(Debug, Deserialize)]
struct OwResponse {
    coord: Option<OwCoord>,
    #[serde(default)]
    weather: Vec<OwCondition>,
    main: Option<OwMain>,
    visibility: Option<i64>,
    wind: Option<OwWind>,
    clouds: Option<OwClouds>,
    rain: Option<Value>,
    snow: Option<Value>,
    dt: Option<i64>,
    sys: Option<OwSys>,
    timezone: Option<i64>,
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwCoord {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwCondition {
    main: Option<String>,
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    pressure: Option<i64>,
    humidity: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    speed: Option<f64>,
    deg: Option<i64>,
    gust: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwClouds {
    all: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

/// Map the raw provider payload into the output schema.
///
/// City name, country code, and current temperature are required; a missing
/// one fails the whole transformation. Everything else degrades to `null`
/// or "N/A".
fn report_from_raw(raw: OwResponse, units: Units) -> Result<WeatherReport, WeatherError> {
    let city = raw.name.ok_or(WeatherError::MissingField("name"))?;
    let sys = raw.sys.unwrap_or_default();
    let country = sys.country.ok_or(WeatherError::MissingField("sys.country"))?;
    let main = raw.main.unwrap_or_default();
    let current = main.temp.ok_or(WeatherError::MissingField("main.temp"))?;

    let condition = raw.weather.into_iter().next().unwrap_or_default();
    let coord = raw.coord.unwrap_or_default();
    let wind = raw.wind.unwrap_or_default();

    Ok(WeatherReport {
        location: LocationReport {
            city,
            country,
            coordinates: Coordinates {
                lat: coord.lat,
                lon: coord.lon,
            },
        },
        weather: ConditionsReport {
            main: condition.main.unwrap_or_default(),
            description: condition.description.unwrap_or_default(),
            icon: condition.icon.unwrap_or_default(),
            temperature: TemperatureReport {
                current,
                feels_like: main.feels_like,
                min: main.temp_min,
                max: main.temp_max,
                unit: units.temperature_label().to_string(),
            },
            pressure: pressure_text(main.pressure),
            humidity: percent_text(main.humidity),
            visibility: visibility_text(raw.visibility),
            wind: WindReport {
                speed: wind_speed_text(wind.speed, units),
                degree: wind.deg,
                gust: wind.gust,
            },
            clouds: percent_text(raw.clouds.and_then(|c| c.all)),
            rain: raw.rain,
            snow: raw.snow,
            sun: SunReport {
                sunrise: sys.sunrise,
                sunset: sys.sunset,
            },
            timezone: raw.timezone,
            timestamp: raw.dt,
        },
    })
}

fn pressure_text(pressure: Option<i64>) -> String {
    match pressure {
        Some(value) => format!("{value} hPa"),
        None => "N/A".to_string(),
    }
}

fn percent_text(value: Option<i64>) -> String {
    match value {
        Some(value) => format!("{value}%"),
        None => "N/A".to_string(),
    }
}

/// Meters to kilometers, one decimal. Zero reads as "no data" upstream.
fn visibility_text(meters: Option<i64>) -> String {
    match meters {
        Some(m) if m > 0 => format!("{:.1} km", m as f64 / 1000.0),
        _ => "N/A".to_string(),
    }
}

fn wind_speed_text(speed: Option<f64>, units: Units) -> String {
    format!("{} {}", speed.unwrap_or(0.0), units.wind_speed_label())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
