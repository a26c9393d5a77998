//! Award date helpers
//!
//! Log records carry their award date as `MM/DD`; the history view groups
//! those dates by month. Zero-padded `MM/DD` strings sort chronologically
//! within a year, which is all the log view needs.

use chrono::{Datelike, Local, Month};

/// Today's date formatted `MM/DD`, in local time
pub fn award_date() -> String {
    let now = Local::now();
    format!("{:02}/{:02}", now.month(), now.day())
}

/// Month name for an `MM/DD` date string, if well-formed
pub fn month_name(date: &str) -> Option<&'static str> {
    let month: u8 = date.split('/').next()?.parse().ok()?;
    Some(Month::try_from(month).ok()?.name())
}
