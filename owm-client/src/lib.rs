//! Async client for the OpenWeatherMap one-call API.
//!
//! This crate defines:
//! - The weather categories and `exclude` computation
//! - Client configuration
//! - Decoded weather records (current, hourly, daily)
//! - The [`WeatherClient`] and its error taxonomy
//!
//! Logging goes through `tracing`; install a subscriber to see it.

pub mod category;
pub mod client;
pub mod config;
mod wire;
pub mod error;
pub mod model;
pub mod provider;

pub use category::WeatherCategory;
pub use client::WeatherClient;
pub use config::{ClientConfig, Units};
pub use error::OwmError;
pub use model::{DailyTemperature, DailyWeather, HourlyWeather, WeatherCondition, WeatherReport};
pub use provider::WeatherProvider;
