//! Location search suggestion entity

use serde::{Deserialize, Serialize};

/// One candidate location from the provider's search endpoint.
///
/// Transient: produced per query and superseded by the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    /// Provider-assigned numeric identifier
    pub id: i64,
    /// Place name
    pub name: String,
    /// Administrative region
    pub region: String,
    /// Country name
    pub country: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Provider URL slug for the location
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_round_trips_through_json() {
        let suggestion = LocationSuggestion {
            id: 2801268,
            name: "London".to_string(),
            region: "City of London, Greater London".to_string(),
            country: "United Kingdom".to_string(),
            lat: 51.52,
            lon: -0.11,
            url: "london-city-of-london-greater-london-united-kingdom".to_string(),
        };
        let json = serde_json::to_string(&suggestion).unwrap();
        let parsed: LocationSuggestion = serde_json::from_str(&json).unwrap();
        assert_eq!(suggestion, parsed);
    }
}
