//! Auto-completion sweep: marks scheduled requests as completed once the
//! wall clock passes the end of their slot. Designed to run once centrally
//! (cron or `sweep --watch`), never per client.

use crate::core::notify::fan_out;
use crate::db::log::ttlog;
use crate::db::queries::{load_scheduled, update_status};
use crate::errors::AppResult;
use crate::models::notification::NotificationKind;
use crate::models::status::RequestStatus;
use chrono::NaiveDate;
use rusqlite::Connection;

/// What a single sweep pass did.
#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub scanned: usize,
    pub completed: Vec<i64>,
    /// Requests whose stored slot no longer parses, with the parse error.
    pub skipped: Vec<(i64, String)>,
}

/// One sweep pass over every assigned/confirmed request.
///
/// Past-dated requests are completed unconditionally (a request left behind
/// while nothing was running must not stay scheduled forever). Requests
/// dated `today` complete once `minute_of_day` is strictly past the parsed
/// end of their slot. Only scheduled rows are scanned, so a second pass over
/// the same data writes nothing.
pub fn run_sweep(
    conn: &Connection,
    today: NaiveDate,
    minute_of_day: u32,
) -> AppResult<SweepOutcome> {
    let mut outcome = SweepOutcome::default();

    for req in load_scheduled(conn)? {
        outcome.scanned += 1;

        let due = if req.date < today {
            true
        } else if req.date == today {
            match req.time_range() {
                Ok(range) => minute_of_day > range.end,
                Err(e) => {
                    outcome.skipped.push((req.id, e.to_string()));
                    continue;
                }
            }
        } else {
            false
        };

        if !due {
            continue;
        }

        update_status(conn, req.id, RequestStatus::Completed)?;
        ttlog(
            conn,
            "sweep",
            &req.id.to_string(),
            &format!(
                "Request {} auto-completed ({} on {}, slot {})",
                req.id,
                req.venue,
                req.date_str(),
                req.time
            ),
        )?;
        fan_out(conn, NotificationKind::Completed, &req, None)?;

        outcome.completed.push(req.id);
    }

    Ok(outcome)
}
