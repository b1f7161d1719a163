//! Notification fan-out: templated writes to the notifications table for
//! every lifecycle event, addressed to the requester and the assigned
//! invigilators.

use crate::db::queries::insert_notification;
use crate::errors::AppResult;
use crate::models::notification::NotificationKind;
use crate::models::request::InvigilationRequest;
use rusqlite::Connection;
use std::collections::BTreeSet;

/// Write one notification per interested user. `detail` is appended to the
/// templated message (e.g. a cancellation reason). Returns the number of
/// rows written.
pub fn fan_out(
    conn: &Connection,
    kind: NotificationKind,
    req: &InvigilationRequest,
    detail: Option<&str>,
) -> AppResult<usize> {
    let mut recipients: BTreeSet<&str> = BTreeSet::new();
    recipients.insert(req.user_id.as_str());
    for user in &req.assigned {
        recipients.insert(user.as_str());
    }

    let message = render_message(kind, req, detail);

    let mut written = 0;
    for user in recipients {
        insert_notification(conn, user, kind, kind.title(), &message)?;
        written += 1;
    }

    Ok(written)
}

fn render_message(
    kind: NotificationKind,
    req: &InvigilationRequest,
    detail: Option<&str>,
) -> String {
    let slot = format!("{} at {} on {} ({})", req.subject, req.venue, req.date_str(), req.time);

    let body = match kind {
        NotificationKind::Created => format!("Invigilation requested for {}.", slot),
        NotificationKind::Assigned => format!("Invigilators assigned for {}.", slot),
        NotificationKind::Confirmed => format!("Invigilation confirmed for {}.", slot),
        NotificationKind::Postponed => format!("Invigilation postponed; new slot: {}.", slot),
        NotificationKind::Cancelled => format!("Invigilation cancelled for {}.", slot),
        NotificationKind::Completed => format!("Invigilation completed for {}.", slot),
    };

    match detail {
        Some(extra) if !extra.trim().is_empty() => format!("{} {}", body, extra.trim()),
        _ => body,
    }
}
