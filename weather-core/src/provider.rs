use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::WeatherError,
    model::{WeatherQuery, WeatherReport},
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Transport seam of the pipeline: anything that can turn a query into a
/// report. Boxed by the CLI so tests can substitute a non-network
/// implementation.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError>;
}
