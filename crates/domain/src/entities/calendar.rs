//! Calendar event store and per-day marker lookup
//!
//! Backs the calendar view: user events live in an in-memory list, and the
//! view derives a date-keyed map telling it which days carry holiday or
//! event markers. The map is rebuilt whenever either list changes.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entities::{Holiday, UserEvent};

/// Markers for one calendar day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarkers {
    /// Names of holidays on this day
    pub holidays: Vec<String>,
    /// Titles of user events on this day
    pub events: Vec<String>,
}

impl DayMarkers {
    /// Whether at least one holiday falls on this day
    pub fn has_holiday(&self) -> bool {
        !self.holidays.is_empty()
    }

    /// Whether at least one user event falls on this day
    pub fn has_event(&self) -> bool {
        !self.events.is_empty()
    }
}

/// In-memory store of user-added events
#[derive(Debug, Clone, Default)]
pub struct EventCalendar {
    events: Vec<UserEvent>,
}

impl EventCalendar {
    /// Create an empty calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event. Appends without de-duplication.
    pub fn add_event(&mut self, event: UserEvent) {
        self.events.push(event);
    }

    /// All events, in insertion order
    pub fn events(&self) -> &[UserEvent] {
        &self.events
    }

    /// Events on a specific day
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &UserEvent> {
        self.events.iter().filter(move |e| e.date == date)
    }

    /// Build the date-keyed marker lookup from the given holiday list and
    /// the stored events. A day with both reports both.
    pub fn day_markers(&self, holidays: &[Holiday]) -> HashMap<NaiveDate, DayMarkers> {
        let mut markers: HashMap<NaiveDate, DayMarkers> = HashMap::new();
        for holiday in holidays {
            markers
                .entry(holiday.date)
                .or_default()
                .holidays
                .push(holiday.name.clone());
        }
        for event in &self.events {
            markers
                .entry(event.date)
                .or_default()
                .events
                .push(event.title.clone());
        }
        markers
    }

    /// Marker lookup restricted to one month, for rendering a month grid
    pub fn month_markers(
        &self,
        year: i32,
        month: u32,
        holidays: &[Holiday],
    ) -> HashMap<NaiveDate, DayMarkers> {
        let mut markers = self.day_markers(holidays);
        markers.retain(|date, _| date.year() == year && date.month() == month);
        markers
    }
}
