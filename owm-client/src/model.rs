use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::warn;

/// Primary weather condition of a time point, e.g. `800 / Clear / clear sky / 01d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub main: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub icon: Option<String>,
}

/// Conditions at one time point: the `current` block or one `hourly` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeather {
    #[serde(rename = "dt", default, with = "crate::wire::unix_time")]
    pub date_time: Option<DateTime<Utc>>,
    /// Only present on `current`.
    #[serde(default, with = "crate::wire::unix_time")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::unix_time")]
    pub sunset: Option<DateTime<Utc>>,
    #[serde(rename = "temp", default, deserialize_with = "crate::wire::lenient")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub feels_like: Option<f64>,
    /// hPa
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub pressure: Option<u32>,
    /// %
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub humidity: Option<u32>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub dew_point: Option<f64>,
    #[serde(rename = "uvi", default, deserialize_with = "crate::wire::lenient")]
    pub uv_index: Option<f64>,
    #[serde(rename = "clouds", default, deserialize_with = "crate::wire::lenient")]
    pub cloud_coverage: Option<u32>,
    /// Metres.
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub visibility: Option<u32>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub wind_speed: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub wind_gust: Option<f64>,
    #[serde(rename = "wind_deg", default, deserialize_with = "crate::wire::lenient")]
    pub wind_bearing: Option<u32>,
    /// Probability of precipitation in `0.0..=1.0`; hourly entries only.
    #[serde(rename = "pop", default, deserialize_with = "crate::wire::lenient")]
    pub precipitation_probability: Option<f64>,
    /// mm over the last hour.
    #[serde(default, with = "crate::wire::last_hour_volume")]
    pub rain: Option<f64>,
    #[serde(default, with = "crate::wire::last_hour_volume")]
    pub snow: Option<f64>,
    #[serde(rename = "weather", default, with = "crate::wire::primary_condition")]
    pub condition: Option<WeatherCondition>,
}

impl HourlyWeather {
    /// `None` unless `value` is a JSON object.
    pub fn from_json(value: &Value) -> Option<Self> {
        parse_object(value)
    }
}

/// Day-part temperatures. `feels_like` blocks carry no min/max.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperature {
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub max: Option<f64>,
    #[serde(rename = "morn", default, deserialize_with = "crate::wire::lenient")]
    pub morning: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub day: Option<f64>,
    #[serde(rename = "eve", default, deserialize_with = "crate::wire::lenient")]
    pub evening: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub night: Option<f64>,
}

/// One `daily` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    #[serde(rename = "dt", default, with = "crate::wire::unix_time")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::unix_time")]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::unix_time")]
    pub sunset: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::unix_time")]
    pub moonrise: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::wire::unix_time")]
    pub moonset: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub moon_phase: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub summary: Option<String>,
    #[serde(rename = "temp", default, deserialize_with = "crate::wire::lenient")]
    pub temperature: Option<DailyTemperature>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub feels_like: Option<DailyTemperature>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub pressure: Option<u32>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub humidity: Option<u32>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub dew_point: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub wind_speed: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub wind_gust: Option<f64>,
    #[serde(rename = "wind_deg", default, deserialize_with = "crate::wire::lenient")]
    pub wind_bearing: Option<u32>,
    #[serde(rename = "clouds", default, deserialize_with = "crate::wire::lenient")]
    pub cloud_coverage: Option<u32>,
    #[serde(rename = "pop", default, deserialize_with = "crate::wire::lenient")]
    pub precipitation_probability: Option<f64>,
    #[serde(rename = "uvi", default, deserialize_with = "crate::wire::lenient")]
    pub uv_index: Option<f64>,
    /// mm over the whole day.
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub rain: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::lenient")]
    pub snow: Option<f64>,
    #[serde(rename = "weather", default, with = "crate::wire::primary_condition")]
    pub condition: Option<WeatherCondition>,
}

impl DailyWeather {
    /// `None` unless `value` is a JSON object.
    pub fn from_json(value: &Value) -> Option<Self> {
        parse_object(value)
    }
}

/// Decoded one-call response.
///
/// A part is `None` both when its category was excluded and when the
/// provider omitted it or sent `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeatherReport {
    pub current: Option<HourlyWeather>,
    pub hourly: Option<Vec<HourlyWeather>>,
    pub daily: Option<Vec<DailyWeather>>,
}

impl WeatherReport {
    pub fn from_json(body: &Value) -> Self {
        let current = match body.get("current") {
            None | Some(Value::Null) => None,
            Some(value) => {
                let parsed = HourlyWeather::from_json(value);
                if parsed.is_none() {
                    warn!("Ignoring 'current': expected a JSON object");
                }
                parsed
            }
        };

        Self {
            current,
            hourly: parse_list(body, "hourly"),
            daily: parse_list(body, "daily"),
        }
    }
}

fn parse_object<T: DeserializeOwned>(value: &Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

fn parse_list<T: DeserializeOwned>(body: &Value, key: &str) -> Option<Vec<T>> {
    match body.get(key)? {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    let parsed = parse_object(item);
                    if parsed.is_none() {
                        warn!(key, index, "Skipping entry: expected a JSON object");
                    }
                    parsed
                })
                .collect(),
        ),
        _ => {
            warn!(key, "Ignoring field: expected a JSON array");
            None
        }
    }
}
