//! WeatherAPI.com integration
//!
//! Client for the WeatherAPI.com HTTP API (<https://www.weatherapi.com>):
//! forecast with air quality, public holidays, and location search. Also
//! hosts the normalizer that reshapes the provider's wire format into the
//! application's `WeatherSnapshot`.

pub mod client;
mod models;
pub mod normalize;

pub use client::{WeatherApi, WeatherApiClient, WeatherApiConfig, WeatherError};
pub use models::{
    Condition, Current, ForecastBlock, ForecastDay, ForecastResponse, LocationBlock, WeatherBundle,
};
pub use normalize::normalize;
