//! HTTP client for the OpenWeatherMap one-call endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::{
    ClientConfig, OwmError, WeatherCategory, WeatherReport,
    category::{exclude_for, exclude_param},
    provider::WeatherProvider,
};

/// Coordinates used by [`WeatherClient::validate_key`].
pub const PROBE_COORDINATES: (f64, f64) = (50.06, 14.44);

/// Client for the one-call API.
///
/// Immutable once built. Every operation issues exactly one GET with the
/// configured timeout and never retries. The underlying connection pool is
/// shared by clones, concurrent calls do not otherwise share state.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    units: String,
    request_timeout: Duration,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    /// Client against the production endpoint with a 10 second timeout.
    pub fn new(api_key: impl Into<String>, units: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key, units))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            api_key: config.api_key,
            units: config.units,
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            base_url: config.base_url,
            http: Client::new(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Fetch the categories in `weather_types` for a coordinate, or all of
    /// them when `weather_types` is `None`.
    #[instrument(skip(self, weather_types))]
    pub async fn fetch_report(
        &self,
        lat: f64,
        lon: f64,
        weather_types: Option<&[WeatherCategory]>,
    ) -> Result<WeatherReport, OwmError> {
        let exclude = exclude_for(weather_types);
        let url = self.url(lat, lon, &exclude)?;

        let body: Value = self.send(url).await?.json().await.map_err(|e| {
            error!("Failed to decode one-call response: {}", e);
            OwmError::from(e)
        })?;

        Ok(WeatherReport::from_json(&body))
    }

    /// Probe request that succeeds on any 200 response. The body is discarded.
    #[instrument(skip(self))]
    pub async fn validate_key(&self) -> Result<(), OwmError> {
        let (lat, lon) = PROBE_COORDINATES;
        let url = self.url(lat, lon, &exclude_for(None))?;

        self.send(url).await?.bytes().await.map_err(|e| {
            error!("Failed to read validation response: {}", e);
            OwmError::from(e)
        })?;

        Ok(())
    }

    /// Full request URL with the query in the order `lat, lon, appid, units,
    /// exclude`. Every value is percent-encoded; `exclude` is joined in the
    /// order given.
    pub fn url(
        &self,
        lat: f64,
        lon: f64,
        exclude: &[WeatherCategory],
    ) -> Result<Url, OwmError> {
        let params = [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", self.units.clone()),
            ("exclude", exclude_param(exclude)),
        ];

        Url::parse_with_params(&self.base_url, &params).map_err(|e| {
            error!("Invalid one-call endpoint '{}': {}", self.base_url, e);
            OwmError::Unknown
        })
    }

    async fn send(&self, url: Url) -> Result<Response, OwmError> {
        debug!(url = %redact(&url), "Requesting one-call data");

        let response = self
            .http
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Request timed out after {:?}", self.request_timeout);
                } else {
                    error!("Failed to send one-call request: {}", e);
                }
                OwmError::from(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let err = OwmError::from_status(status);
            warn!(%status, "One-call request failed: {}", err);
            return Err(err);
        }

        Ok(response)
    }
}

/// Rendered URL with the `appid` value masked.
fn redact(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "appid" { "***".into() } else { value.into_owned() };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn fetch_report(
        &self,
        lat: f64,
        lon: f64,
        weather_types: Option<&[WeatherCategory]>,
    ) -> Result<WeatherReport, OwmError> {
        WeatherClient::fetch_report(self, lat, lon, weather_types).await
    }

    async fn validate_key(&self) -> Result<(), OwmError> {
        WeatherClient::validate_key(self).await
    }
}
