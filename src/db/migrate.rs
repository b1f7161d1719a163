use crate::ui::messages::warning;
use rusqlite::{Connection, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `requests` table and its indexes.
fn create_requests_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS requests (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            subject           TEXT NOT NULL,
            venue             TEXT NOT NULL,
            lecturer          TEXT NOT NULL DEFAULT '',
            user_id           TEXT NOT NULL DEFAULT 'cli',
            date              TEXT NOT NULL,
            time              TEXT NOT NULL,
            student_count     INTEGER NOT NULL DEFAULT 0,
            invigilator_count INTEGER NOT NULL DEFAULT 1,
            status            TEXT NOT NULL DEFAULT 'requested'
                CHECK(status IN ('requested','assigned','confirmed','completed','cancelled','postponed')),
            notes             TEXT DEFAULT '',
            created_at        TEXT NOT NULL,
            updated_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_requests_venue_date ON requests(venue, date);
        CREATE INDEX IF NOT EXISTS idx_requests_status ON requests(status);
        "#,
    )?;
    Ok(())
}

/// Create the `assignments` table (assigned invigilators per request).
fn create_assignments_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS assignments (
            request_id INTEGER NOT NULL,
            user_id    TEXT NOT NULL,
            created_at TEXT NOT NULL,
            UNIQUE(request_id, user_id)
        );

        CREATE INDEX IF NOT EXISTS idx_assignments_request ON assignments(request_id);
        "#,
    )?;
    Ok(())
}

/// Create the `notifications` table.
fn create_notifications_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    TEXT NOT NULL,
            kind       TEXT NOT NULL
                CHECK(kind IN ('created','assigned','confirmed','postponed','cancelled','completed')),
            title      TEXT NOT NULL,
            message    TEXT NOT NULL,
            is_read    INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_notifications_user_read ON notifications(user_id, is_read);
        "#,
    )?;
    Ok(())
}

/// Check if the `requests` table has a given column.
fn requests_has_column(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('requests')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Databases created before 0.3 stored the lecturer inside `notes`.
fn migrate_add_lecturer_column(conn: &Connection) -> Result<()> {
    if requests_has_column(conn, "lecturer")? {
        return Ok(());
    }

    warning("Adding 'lecturer' column to requests table...");
    conn.execute_batch("ALTER TABLE requests ADD COLUMN lecturer TEXT NOT NULL DEFAULT '';")?;
    Ok(())
}

/// Run all pending migrations, oldest first. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_requests_table(conn)?;
    create_assignments_table(conn)?;
    create_notifications_table(conn)?;
    migrate_add_lecturer_column(conn)?;
    Ok(())
}
