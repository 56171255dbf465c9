use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const API_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Unit systems the provider understands. The client itself accepts any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Standard,
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Units> for String {
    fn from(units: Units) -> Self {
        units.as_str().to_string()
    }
}

/// Settings for a [`WeatherClient`](crate::WeatherClient).
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// units = "imperial"
/// request_timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,

    #[serde(default = "default_units")]
    pub units: String,

    /// Wall-clock limit for one request, in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// One-call endpoint; overridden in tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_units() -> String {
    Units::Metric.into()
}

const fn default_timeout() -> u64 {
    10
}

fn default_base_url() -> String {
    API_URL.to_string()
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            units: units.into(),
            request_timeout_secs: default_timeout(),
            base_url: default_base_url(),
        }
    }

    /// Parse a config from TOML text. Nothing is read from disk.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse client configuration")
    }
}
