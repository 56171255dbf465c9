use std::fmt::Debug;

use async_trait::async_trait;

use crate::{OwmError, WeatherCategory, WeatherReport};

/// Seam over the one-call API so callers can substitute a fake.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch a report for a coordinate. `None` requests every category.
    async fn fetch_report(
        &self,
        lat: f64,
        lon: f64,
        weather_types: Option<&[WeatherCategory]>,
    ) -> Result<WeatherReport, OwmError>;

    /// Confirm that the API key authenticates.
    async fn validate_key(&self) -> Result<(), OwmError>;
}
