use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use weather_core::{
    Config, OpenWeatherProvider, Units, WeatherError, WeatherProvider, WeatherQuery,
    resolve_api_key,
};

use crate::output;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for Units {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
        }
    }
}

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Fetch current weather for a location as structured JSON"
)]
pub struct Cli {
    /// City name, optionally with a country code, e.g. "London" or "London,uk".
    pub location: String,

    /// Country code (e.g. us, gb, jp) when not part of the location itself.
    #[arg(short, long)]
    pub country: Option<String>,

    /// Units of measurement.
    #[arg(short, long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// OpenWeatherMap API key; falls back to OPENWEATHER_API_KEY, then the config file.
    #[arg(long)]
    pub api_key: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let query = self.into_query()?;

        let provider: Box<dyn WeatherProvider> =
            Box::new(OpenWeatherProvider::new(query.api_key.clone()));
        let report = provider.current_weather(&query).await?;

        output::write_report(&report, query.output.as_deref(), query.pretty)?;

        Ok(())
    }

    /// Resolve arguments, the environment, and the config file into an
    /// immutable query. Fails before any network activity.
    fn into_query(self) -> Result<WeatherQuery, WeatherError> {
        let (location, inline_country) = split_location(&self.location);
        if location.is_empty() {
            return Err(WeatherError::Configuration(
                "location must not be empty".to_string(),
            ));
        }

        let config = Config::load()?;
        let api_key = resolve_api_key(self.api_key, &config)?;

        Ok(WeatherQuery {
            location,
            country: inline_country.or(self.country),
            units: self.units.into(),
            api_key,
            output: self.output,
            pretty: self.pretty,
        })
    }
}

/// Split "City,CC" into city and country code; a bare city passes through.
/// An inline code takes precedence over `--country`.
fn split_location(input: &str) -> (String, Option<String>) {
    match input.split_once(',') {
        Some((city, country)) => {
            let country = country.trim();
            (
                city.trim().to_string(),
                (!country.is_empty()).then(|| country.to_string()),
            )
        }
        None => (input.trim().to_string(), None),
    }
}
