use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{band::UvBand, error::InputError};

const UTC_DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub postcode: String,
}

/// One station reading as served by the UV index API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UvReading {
    pub city: String,
    pub city_id: String,
    pub short_name: String,
    pub state: String,
    #[serde(deserialize_with = "lenient_uv_index")]
    pub uv_index: f64,
    pub time: String,
    pub date: String,
    pub fulldate: String,
    pub utcdatetime: String,
    pub status: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Planar distance from the queried coordinates, for nearest-city lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl UvReading {
    pub fn band(&self) -> UvBand {
        UvBand::from_index(self.uv_index)
    }

    /// "5:41 PM, 17/03/2025", or whichever half is present.
    pub fn time_info(&self) -> String {
        match (self.time.is_empty(), self.date.is_empty()) {
            (false, false) => format!("{}, {}", self.time, self.date),
            (false, true) => self.time.clone(),
            _ => String::new(),
        }
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.utcdatetime, UTC_DATETIME_FORMAT)
            .ok()
            .map(|ndt| ndt.and_utc())
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_empty() || self.status.eq_ignore_ascii_case("ok")
    }
}

/// A four-digit Australian postcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::EmptyPostcode);
        }
        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::InvalidPostcode(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Postcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, InputError> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(InputError::InvalidCoordinates { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Planar distance in degrees. Only good for ranking nearby stations.
    pub fn planar_distance(&self, lat: f64, lng: f64) -> f64 {
        ((self.lat - lat).powi(2) + (self.lng - lng).powi(2)).sqrt()
    }
}

/// Response of a postcode lookup. `uv_index` is absent when the backend knows
/// the postcode but has no reading for its city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostcodeLookup {
    pub city: City,
    pub uv_index: Option<UvReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Accepts a non-negative number or numeric string; anything else reads as zero.
fn lenient_uv_index<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;

    let parsed = match &raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => {
            tracing::debug!(value = %raw, "unusable uv_index, using 0");
            Ok(0.0)
        }
    }
}
