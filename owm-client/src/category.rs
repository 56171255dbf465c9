use std::{convert::TryFrom, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the data segments the one-call endpoint can include or exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Current,
    Minutely,
    Hourly,
    Daily,
    Alerts,
}

impl WeatherCategory {
    /// Every category, in the order they appear in the `exclude` parameter.
    pub const ALL: [WeatherCategory; 5] = [
        WeatherCategory::Current,
        WeatherCategory::Minutely,
        WeatherCategory::Hourly,
        WeatherCategory::Daily,
        WeatherCategory::Alerts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Current => "current",
            WeatherCategory::Minutely => "minutely",
            WeatherCategory::Hourly => "hourly",
            WeatherCategory::Daily => "daily",
            WeatherCategory::Alerts => "alerts",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WeatherCategory {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        WeatherCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown weather category '{value}'. \
                     Supported categories: current, minutely, hourly, daily, alerts."
                )
            })
    }
}

impl FromStr for WeatherCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherCategory::try_from(s)
    }
}

/// Categories to send as `exclude` so that the provider returns exactly `requested`.
///
/// `None` means "everything", which excludes nothing.
pub fn exclude_for(requested: Option<&[WeatherCategory]>) -> Vec<WeatherCategory> {
    match requested {
        None => Vec::new(),
        Some(requested) => WeatherCategory::ALL
            .into_iter()
            .filter(|c| !requested.contains(c))
            .collect(),
    }
}

pub fn exclude_param(exclude: &[WeatherCategory]) -> String {
    exclude
        .iter()
        .map(WeatherCategory::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use WeatherCategory::*;

    #[test]
    fn category_as_str_roundtrip() {
        for c in WeatherCategory::ALL {
            let parsed = WeatherCategory::try_from(c.as_str()).expect("roundtrip should succeed");
            assert_eq!(c, parsed);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Hourly".parse::<WeatherCategory>().unwrap(), Hourly);
        assert_eq!(" DAILY ".parse::<WeatherCategory>().unwrap(), Daily);
    }

    #[test]
    fn unknown_category_error() {
        let err = WeatherCategory::try_from("weekly").unwrap_err();
        assert!(err.to_string().contains("Unknown weather category"));
    }

    #[test]
    fn no_request_excludes_nothing() {
        assert!(exclude_for(None).is_empty());
        assert_eq!(exclude_param(&exclude_for(None)), "");
    }

    #[test]
    fn exclude_is_complement_in_fixed_order() {
        let exclude = exclude_for(Some(&[Daily, Current]));
        assert_eq!(exclude, vec![Minutely, Hourly, Alerts]);
        assert_eq!(exclude_param(&exclude), "minutely,hourly,alerts");
    }

    #[test]
    fn empty_request_excludes_everything() {
        let exclude = exclude_for(Some(&[]));
        assert_eq!(exclude, WeatherCategory::ALL.to_vec());
        assert_eq!(exclude_param(&exclude), "current,minutely,hourly,daily,alerts");
    }

    #[test]
    fn exclude_holds_for_every_subset() {
        for mask in 0u8..32 {
            let requested: Vec<_> = WeatherCategory::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect();

            let expected = ["current", "minutely", "hourly", "daily", "alerts"]
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) == 0)
                .map(|(_, name)| name)
                .collect::<Vec<_>>()
                .join(",");

            let exclude = exclude_for(Some(&requested));

            assert_eq!(exclude.len() + requested.len(), WeatherCategory::ALL.len());
            assert!(exclude.iter().all(|c| !requested.contains(c)));
            assert_eq!(exclude_param(&exclude), expected, "mask {mask:#07b}");
        }
    }

    #[test]
    fn duplicate_requests_are_harmless() {
        let exclude = exclude_for(Some(&[Hourly, Hourly, Alerts]));
        assert_eq!(exclude, vec![Current, Minutely, Daily]);
    }
}
