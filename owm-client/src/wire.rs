//! Field codecs for the provider's JSON shapes.
//!
//! Decoding never fails: a value of the wrong shape becomes `None`.
//! Encoding writes the same shape back, so records round-trip.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Unix seconds, UTC.
pub(crate) mod unix_time {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub(crate) fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        chrono::serde::ts_seconds_option::serialize(value, serializer)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_i64().and_then(|ts| DateTime::from_timestamp(ts, 0)))
    }
}

/// Hourly precipitation: `{"1h": <mm>}`.
pub(crate) mod last_hour_volume {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    #[derive(Serialize)]
    struct LastHour {
        #[serde(rename = "1h")]
        volume: f64,
    }

    pub(crate) fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(|volume| LastHour { volume }).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.get("1h").and_then(Value::as_f64))
    }
}

/// The provider sends a list of conditions; only the primary one is kept.
pub(crate) mod primary_condition {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    use crate::model::WeatherCondition;

    pub(crate) fn serialize<S>(
        value: &Option<WeatherCondition>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.as_ref().map(std::slice::from_ref).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<WeatherCondition>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value
            .as_array()
            .and_then(|list| list.first())
            .and_then(|first| serde_json::from_value(first.clone()).ok()))
    }
}
