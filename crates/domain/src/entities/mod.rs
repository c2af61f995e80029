//! Domain entities

pub mod calendar;
pub mod countdown;
pub mod holiday;
pub mod location;
pub mod user_event;
pub mod weather;

pub use calendar::{DayMarkers, EventCalendar};
pub use countdown::{Countdown, CountdownState};
pub use holiday::Holiday;
pub use location::LocationSuggestion;
pub use user_event::UserEvent;
pub use weather::{Astronomy, CurrentConditions, DailyEntry, HourlyEntry, Location, WeatherSnapshot};
