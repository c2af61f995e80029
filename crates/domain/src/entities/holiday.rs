//! Holiday entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of upcoming holidays shown on the dashboard
const DISPLAY_LIMIT: usize = 5;

/// A public holiday, sourced verbatim from the weather provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Holiday date
    pub date: NaiveDate,
    /// Holiday name
    pub name: String,
}

impl Holiday {
    /// Holidays strictly after `today`, sorted by date, first five only
    pub fn upcoming(holidays: &[Self], today: NaiveDate) -> Vec<&Self> {
        let mut upcoming: Vec<&Self> = holidays.iter().filter(|h| h.date > today).collect();
        upcoming.sort_by_key(|h| h.date);
        upcoming.truncate(DISPLAY_LIMIT);
        upcoming
    }
}
