//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The error taxonomy shared by the whole pipeline
//! - Shared domain models (query, report)
//! - The provider abstraction and its OpenWeatherMap implementation
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::{API_KEY_ENV, Config, resolve_api_key};
pub use error::WeatherError;
pub use model::{Units, WeatherQuery, WeatherReport};
pub use provider::{OpenWeatherProvider, WeatherProvider};
