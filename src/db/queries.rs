use crate::errors::{AppError, AppResult};
use crate::models::notification::{Notification, NotificationKind};
use crate::models::request::InvigilationRequest;
use crate::models::status::RequestStatus;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Map a `requests` row into the model. The assigned set lives in the
/// `assignments` table and is attached separately.
pub fn map_row(row: &Row) -> Result<InvigilationRequest> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = RequestStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(InvigilationRequest {
        id: row.get("id")?,
        subject: row.get("subject")?,
        venue: row.get("venue")?,
        lecturer: row.get("lecturer")?,
        user_id: row.get("user_id")?,
        date,
        time: row.get("time")?,
        student_count: row.get("student_count")?,
        invigilator_count: row.get("invigilator_count")?,
        status,
        assigned: Vec::new(),
        notes: row.get::<_, Option<String>>("notes")?.unwrap_or_default(),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Invigilators assigned to a request, in stable order.
pub fn load_assignees(conn: &Connection, request_id: i64) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT user_id FROM assignments WHERE request_id = ?1 ORDER BY user_id ASC",
    )?;

    let rows = stmt.query_map([request_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn attach_assignees(
    conn: &Connection,
    mut req: InvigilationRequest,
) -> AppResult<InvigilationRequest> {
    req.assigned = load_assignees(conn, req.id)?;
    Ok(req)
}

/// Load a single request by id, assigned set included.
pub fn load_request(conn: &Connection, id: i64) -> AppResult<InvigilationRequest> {
    let req = conn
        .prepare("SELECT * FROM requests WHERE id = ?1")?
        .query_row([id], map_row)
        .optional()?
        .ok_or(AppError::RequestNotFound(id))?;

    attach_assignees(conn, req)
}

/// Load requests matching the optional venue/date filters and the status
/// set (empty set ⇒ any status), ordered by date and time.
pub fn load_requests(
    conn: &Connection,
    venue: Option<&str>,
    date: Option<&str>,
    statuses: &[RequestStatus],
) -> AppResult<Vec<InvigilationRequest>> {
    let mut sql = String::from("SELECT * FROM requests WHERE 1=1");
    let mut args: Vec<String> = Vec::new();

    if let Some(v) = venue {
        args.push(v.to_string());
        sql.push_str(&format!(" AND venue = ?{}", args.len()));
    }
    if let Some(d) = date {
        args.push(d.to_string());
        sql.push_str(&format!(" AND date = ?{}", args.len()));
    }
    if !statuses.is_empty() {
        let mut placeholders = Vec::new();
        for s in statuses {
            args.push(s.to_db_str().to_string());
            placeholders.push(format!("?{}", args.len()));
        }
        sql.push_str(&format!(" AND status IN ({})", placeholders.join(",")));
    }
    sql.push_str(" ORDER BY date ASC, time ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn rusqlite::ToSql> =
        args.iter().map(|s| s as &dyn rusqlite::ToSql).collect();

    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(attach_assignees(conn, r?)?);
    }
    Ok(out)
}

/// All requests currently holding a venue slot (assigned or confirmed).
pub fn load_scheduled(conn: &Connection) -> AppResult<Vec<InvigilationRequest>> {
    load_requests(
        conn,
        None,
        None,
        &[RequestStatus::Assigned, RequestStatus::Confirmed],
    )
}

/// Scheduled requests at a single venue, for the availability check.
pub fn load_scheduled_by_venue(
    conn: &Connection,
    venue: &str,
) -> AppResult<Vec<InvigilationRequest>> {
    load_requests(
        conn,
        Some(venue),
        None,
        &[RequestStatus::Assigned, RequestStatus::Confirmed],
    )
}

/// Insert a new request and return the store-assigned id.
pub fn insert_request(conn: &Connection, req: &InvigilationRequest) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO requests
            (subject, venue, lecturer, user_id, date, time,
             student_count, invigilator_count, status, notes, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            req.subject,
            req.venue,
            req.lecturer,
            req.user_id,
            req.date.format("%Y-%m-%d").to_string(),
            req.time,
            req.student_count,
            req.invigilator_count,
            req.status.to_db_str(),
            req.notes,
            req.created_at,
            req.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update every mutable field of a request; `updated_at` is bumped here.
pub fn update_request(conn: &Connection, req: &InvigilationRequest) -> AppResult<()> {
    conn.execute(
        "UPDATE requests
         SET subject = ?1, venue = ?2, lecturer = ?3, date = ?4, time = ?5,
             student_count = ?6, invigilator_count = ?7, status = ?8,
             notes = ?9, updated_at = ?10
         WHERE id = ?11",
        params![
            req.subject,
            req.venue,
            req.lecturer,
            req.date.format("%Y-%m-%d").to_string(),
            req.time,
            req.student_count,
            req.invigilator_count,
            req.status.to_db_str(),
            req.notes,
            Local::now().to_rfc3339(),
            req.id,
        ],
    )?;
    Ok(())
}

/// Write a status transition; `updated_at` is bumped here.
pub fn update_status(conn: &Connection, id: i64, status: RequestStatus) -> AppResult<()> {
    conn.execute(
        "UPDATE requests SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.to_db_str(), Local::now().to_rfc3339(), id],
    )?;
    Ok(())
}

/// Attach an invigilator to a request. Re-assigning the same user is a no-op.
pub fn insert_assignment(conn: &Connection, request_id: i64, user_id: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO assignments (request_id, user_id, created_at)
         VALUES (?1, ?2, ?3)",
        params![request_id, user_id, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn insert_notification(
    conn: &Connection,
    user_id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO notifications (user_id, kind, title, message, is_read, created_at)
         VALUES (?1, ?2, ?3, ?4, 0, ?5)",
    )?;

    stmt.execute(params![
        user_id,
        kind.to_db_str(),
        title,
        message,
        Local::now().to_rfc3339(),
    ])?;

    Ok(())
}

fn map_notification(row: &Row) -> Result<Notification> {
    let kind_str: String = row.get("kind")?;
    let kind = NotificationKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!(
                "Invalid notification kind: {}",
                kind_str
            ))),
        )
    })?;

    Ok(Notification {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        title: row.get("title")?,
        message: row.get("message")?,
        read: row.get::<_, i64>("is_read")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Notifications, newest first, optionally for one user and/or unread only.
pub fn load_notifications(
    conn: &Connection,
    user: Option<&str>,
    unread_only: bool,
) -> AppResult<Vec<Notification>> {
    let mut sql = String::from("SELECT * FROM notifications WHERE 1=1");
    let mut args: Vec<String> = Vec::new();

    if let Some(u) = user {
        args.push(u.to_string());
        sql.push_str(&format!(" AND user_id = ?{}", args.len()));
    }
    if unread_only {
        sql.push_str(" AND is_read = 0");
    }
    sql.push_str(" ORDER BY created_at DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn rusqlite::ToSql> =
        args.iter().map(|s| s as &dyn rusqlite::ToSql).collect();

    let rows = stmt.query_map(rusqlite::params_from_iter(params), map_notification)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Mark a notification as read. Returns false when the id does not exist.
pub fn mark_notification_read(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("UPDATE notifications SET is_read = 1 WHERE id = ?1", [id])?;
    Ok(changed > 0)
}
