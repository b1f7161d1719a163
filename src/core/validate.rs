//! Field validation for request creation and edits.
//! All fields are checked together; the caller receives every error at once
//! instead of the first failure.

use crate::core::timerange::TimeRange;
use crate::models::request::RequestDraft;
use crate::utils::date::parse_date;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Structural shape of a slot string; values are range-checked by the parser.
static TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}:\d{2}(\s*-\s*\d{1,2}:\d{2})?$").expect("static regex")
});

/// Returns a map of field → message; an empty map means the draft is valid.
pub fn validate(draft: &RequestDraft) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if draft.subject.trim().is_empty() {
        errors.insert("subject".to_string(), "Subject is required".to_string());
    }

    if draft.venue.trim().is_empty() {
        errors.insert("venue".to_string(), "Venue is required".to_string());
    }

    if draft.date.trim().is_empty() {
        errors.insert("date".to_string(), "Date is required".to_string());
    } else if parse_date(draft.date.trim()).is_none() {
        errors.insert(
            "date".to_string(),
            "Invalid date (expected YYYY-MM-DD)".to_string(),
        );
    }

    // A garbled time string must never reach the overlap evaluator, so the
    // slot is validated structurally here, not just for non-emptiness.
    let time = draft.time.trim();
    if time.is_empty() {
        errors.insert("time".to_string(), "Time slot is required".to_string());
    } else if !TIME_RANGE_RE.is_match(time) || TimeRange::parse(time).is_err() {
        errors.insert(
            "time".to_string(),
            "Invalid time slot (expected \"HH:MM - HH:MM\")".to_string(),
        );
    }

    if draft.student_count < 0 {
        errors.insert(
            "student_count".to_string(),
            "Student count must be zero or positive".to_string(),
        );
    }

    if draft.invigilator_count < 1 {
        errors.insert(
            "invigilator_count".to_string(),
            "At least one invigilator is required".to_string(),
        );
    }

    errors
}
