//! User-added calendar event entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::EventId;

/// An event added by the user through the calendar view.
///
/// Held only in ephemeral state, never persisted. The date is a concrete
/// calendar day; time of day is irrelevant for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEvent {
    /// Unique event identifier
    pub id: EventId,
    /// The calendar day the event falls on
    pub date: NaiveDate,
    /// Event title
    pub title: String,
}

impl UserEvent {
    /// Create a new event with a fresh ID
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the title is blank.
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "event title must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: EventId::new(),
            date,
            title,
        })
    }
}
