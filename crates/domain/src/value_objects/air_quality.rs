//! Air quality index value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// US EPA air quality index, an ordinal from 1 (good) to 6 (hazardous)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AirQualityIndex(u8);

impl AirQualityIndex {
    /// Create a new index with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if the value is not in 1..=6.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(1..=6).contains(&value) {
            return Err(DomainError::out_of_range("us_epa_index", value, "1-6"));
        }
        Ok(Self(value))
    }

    /// Get the underlying ordinal
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Human-readable EPA band label
    pub const fn label(&self) -> &'static str {
        match self.0 {
            1 => "Good",
            2 => "Moderate",
            3 => "Unhealthy for sensitive groups",
            4 => "Unhealthy",
            5 => "Very unhealthy",
            _ => "Hazardous",
        }
    }
}

impl TryFrom<u8> for AirQualityIndex {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AirQualityIndex> for u8 {
    fn from(index: AirQualityIndex) -> Self {
        index.0
    }
}

impl fmt::Display for AirQualityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_range() {
        for value in 1..=6 {
            assert!(AirQualityIndex::new(value).is_ok());
        }
    }

    #[test]
    fn rejects_zero_and_above_six() {
        assert!(AirQualityIndex::new(0).is_err());
        assert!(AirQualityIndex::new(7).is_err());
    }

    #[test]
    fn labels_cover_all_bands() {
        assert_eq!(AirQualityIndex::new(1).unwrap().label(), "Good");
        assert_eq!(AirQualityIndex::new(6).unwrap().label(), "Hazardous");
    }

    #[test]
    fn serializes_as_plain_number() {
        let index = AirQualityIndex::new(3).unwrap();
        assert_eq!(serde_json::to_string(&index).unwrap(), "3");

        let parsed: AirQualityIndex = serde_json::from_str("2").unwrap();
        assert_eq!(parsed.value(), 2);
    }

    #[test]
    fn deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<AirQualityIndex>("0").is_err());
        assert!(serde_json::from_str::<AirQualityIndex>("9").is_err());
    }

    #[test]
    fn display_includes_label() {
        let index = AirQualityIndex::new(4).unwrap();
        assert_eq!(index.to_string(), "4 (Unhealthy)");
    }
}
