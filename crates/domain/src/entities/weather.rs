//! Normalized weather data model
//!
//! The application-internal shape of a weather lookup: flattened current
//! conditions, one hourly array for the first forecast day, a daily array,
//! holidays, and astronomy. Built fresh on every successful fetch and
//! replaced wholesale on the next query, never partially mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::Holiday;
use crate::value_objects::AirQualityIndex;

/// The resolved location a snapshot was produced for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// City or place name
    pub name: String,
    /// Administrative region
    pub region: String,
    /// Country name
    pub country: String,
    /// Provider-reported local time, e.g. "2026-08-30 14:05"
    pub localtime: String,
    /// IANA timezone identifier
    pub timezone: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Location {
    /// Display label in "Name, Country" form
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Flattened current conditions, an immutable snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temp_c: f64,
    /// Temperature in Fahrenheit
    pub temp_f: f64,
    /// Feels-like temperature in Celsius
    pub feelslike_c: f64,
    /// Feels-like temperature in Fahrenheit
    pub feelslike_f: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_kph: f64,
    /// Wind speed in mph
    pub wind_mph: f64,
    /// Visibility in kilometers
    pub vis_km: f64,
    /// Visibility in miles
    pub vis_miles: f64,
    /// Condition text, flattened from the provider's nested object
    pub condition: String,
    /// US EPA air quality index, when the provider reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<AirQualityIndex>,
}

/// One hour of the first forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// Time of day in "HH:MM" form, split from the provider timestamp
    pub time: String,
    /// Temperature in Celsius
    pub temp_c: f64,
    /// Temperature in Fahrenheit
    pub temp_f: f64,
    /// Chance of rain percentage (0-100)
    pub chance_of_rain: u8,
    /// Condition text
    pub condition: String,
}

/// Aggregates for one forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Forecast date
    pub date: NaiveDate,
    /// Minimum temperature in Celsius
    pub min_c: f64,
    /// Maximum temperature in Celsius
    pub max_c: f64,
    /// Average temperature in Celsius
    pub avg_c: f64,
    /// Minimum temperature in Fahrenheit
    pub min_f: f64,
    /// Maximum temperature in Fahrenheit
    pub max_f: f64,
    /// Average temperature in Fahrenheit
    pub avg_f: f64,
    /// Chance of rain percentage (0-100)
    pub chance_of_rain: u8,
    /// Condition text
    pub condition: String,
}

/// Sunrise and sunset for the first forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Astronomy {
    /// Sunrise time, e.g. "06:42 AM"
    pub sunrise: String,
    /// Sunset time, e.g. "08:03 PM"
    pub sunset: String,
}

/// Complete normalized weather data for one location query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Resolved location
    pub location: Location,
    /// Current conditions
    pub current: CurrentConditions,
    /// Hourly entries for the first forecast day (24 entries)
    pub hourly: Vec<HourlyEntry>,
    /// Daily entries for the forecast window (at most 7)
    pub daily: Vec<DailyEntry>,
    /// Holidays for the queried location, empty when unavailable
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Astronomy for the first forecast day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub astronomy: Option<Astronomy>,
}

impl WeatherSnapshot {
    /// Get today's daily entry, when present
    pub fn today(&self) -> Option<&DailyEntry> {
        self.daily.first()
    }

    /// Holidays strictly after `today`, capped at the display limit of 5
    pub fn upcoming_holidays(&self, today: NaiveDate) -> Vec<&Holiday> {
        Holiday::upcoming(&self.holidays, today)
    }
}
