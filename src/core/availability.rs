//! Venue availability: rejects a slot that overlaps an already scheduled
//! request at the same venue and date.

use crate::core::timerange::{TimeRange, conflicts};
use crate::db::queries::load_scheduled_by_venue;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Pure read: scans assigned/confirmed requests at `venue` and reports
/// whether the candidate slot is free. `exclude_id` lets an edit check a
/// request against everything but itself.
///
/// No transaction wraps check-then-write; two concurrent submissions for the
/// same slot can both pass. Callers re-check at submission time.
pub fn check_availability(
    conn: &Connection,
    venue: &str,
    date: &str,
    time: &str,
    exclude_id: Option<i64>,
) -> AppResult<bool> {
    let candidate = TimeRange::parse(time)?;

    for existing in load_scheduled_by_venue(conn, venue)? {
        if Some(existing.id) == exclude_id {
            continue;
        }

        // A stored slot that no longer parses cannot block the venue; the
        // sweep reports such rows separately.
        let Ok(range) = existing.time_range() else {
            continue;
        };

        if conflicts(date, &candidate, &existing.date_str(), &range) {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Same check, but expressed as a refusal: Ok(()) when the slot is free,
/// `VenueConflict` otherwise.
pub fn ensure_available(
    conn: &Connection,
    venue: &str,
    date: &str,
    time: &str,
    exclude_id: Option<i64>,
) -> AppResult<()> {
    if check_availability(conn, venue, date, time, exclude_id)? {
        Ok(())
    } else {
        Err(AppError::VenueConflict {
            venue: venue.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        })
    }
}
