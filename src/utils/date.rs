//! Date helpers shared by validation, the sweep and the CLI.

use chrono::{Local, NaiveDate, Timelike};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Minutes elapsed since local midnight, the clock value the sweep compares
/// slot ends against.
pub fn minute_of_day() -> u32 {
    let now = Local::now();
    now.hour() * 60 + now.minute()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
