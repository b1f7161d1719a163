//! Parsing of "HH:MM - HH:MM" slot strings and interval overlap evaluation.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// A booked slot expressed in minutes since midnight (0–1439).
/// Times are naive local time tied to the record's date; no timezone handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

impl TimeRange {
    /// Parse a slot string of the form `"<start> - <end>"` where each side is
    /// `H:MM` or `HH:MM` (24-hour). The string is split on the first `-` and
    /// both sides are trimmed; a missing end segment defaults to the start.
    /// A malformed segment is a hard error, never a silent garbage value.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidTimeRange(raw.to_string()));
        }

        let (lhs, rhs) = match trimmed.split_once('-') {
            Some((l, r)) => (l.trim(), r.trim()),
            None => (trimmed, ""),
        };

        let start =
            parse_minute(lhs).ok_or_else(|| AppError::InvalidTimeRange(raw.to_string()))?;

        let end = if rhs.is_empty() {
            start
        } else {
            parse_minute(rhs).ok_or_else(|| AppError::InvalidTimeRange(raw.to_string()))?
        };

        Ok(Self { start, end })
    }

    /// Half-open interval overlap: back-to-back slots (one ending exactly
    /// when the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

fn parse_minute(t: &str) -> Option<u32> {
    let parsed = NaiveTime::parse_from_str(t, "%H:%M").ok()?;
    Some(parsed.hour() * 60 + parsed.minute())
}

/// Two (date, range) pairs conflict only when the dates match and the ranges
/// overlap. Symmetric by construction.
pub fn conflicts(date_a: &str, range_a: &TimeRange, date_b: &str, range_b: &TimeRange) -> bool {
    date_a == date_b && range_a.overlaps(range_b)
}
