//! WeatherAPI.com wire models
//!
//! Raw request/response shapes as the provider sends them. Field names match
//! the wire format so the proxy endpoints can re-serialize responses without
//! reshaping; `normalize` converts these into the domain model.

use serde::{Deserialize, Serialize};

use domain::Holiday;

/// Response of `/forecast.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: LocationBlock,
    pub current: Current,
    pub forecast: ForecastBlock,
}

/// Resolved location block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationBlock {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime: String,
}

/// Nested condition object; only the text survives normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
}

/// Air quality block, present when the forecast was requested with `aqi=yes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: Option<u8>,
}

/// Current conditions as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_mph: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<AirQuality>,
}

/// Forecast container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBlock {
    pub forecastday: Vec<ForecastDay>,
}

/// One forecast day: daily aggregates, astronomy, and 24 hourly entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// ISO date, e.g. "2026-08-30"
    pub date: String,
    pub day: Day,
    pub astro: Astro,
    pub hour: Vec<Hour>,
}

/// Daily aggregate block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub mintemp_c: f64,
    pub maxtemp_c: f64,
    pub avgtemp_c: f64,
    pub mintemp_f: f64,
    pub maxtemp_f: f64,
    pub avgtemp_f: f64,
    #[serde(default)]
    pub daily_chance_of_rain: u8,
    pub condition: Condition,
}

/// Sunrise/sunset block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
}

/// One hourly entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hour {
    /// Provider timestamp, e.g. "2026-08-30 14:00"
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    #[serde(default)]
    pub chance_of_rain: u8,
    pub condition: Condition,
}

/// Response of `/holidays.json`
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysResponse {
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

/// One holiday entry; extra provider fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    pub date: chrono::NaiveDate,
    pub name: String,
}

impl From<HolidayEntry> for Holiday {
    fn from(entry: HolidayEntry) -> Self {
        Self {
            date: entry.date,
            name: entry.name,
        }
    }
}

/// Error body the provider attaches to non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

/// The weather endpoint's combined payload: the forecast response with the
/// holiday list merged in, mirroring the upstream JSON plus one extra key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherBundle {
    #[serde(flatten)]
    pub forecast: ForecastResponse,
    pub holidays: Vec<Holiday>,
}
