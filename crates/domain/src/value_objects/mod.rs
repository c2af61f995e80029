//! Domain value objects

mod air_quality;
mod event_id;

pub use air_quality::AirQualityIndex;
pub use event_id::EventId;
