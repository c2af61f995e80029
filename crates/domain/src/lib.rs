//! Domain layer for Climenda
//!
//! Contains the normalized weather data model, calendar and countdown state
//! machines, value objects, and domain errors. This layer has no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
