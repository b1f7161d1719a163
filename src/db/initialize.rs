use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring the database up to the current schema. All table creation and
/// column upgrades go through the migration engine, so an old requests
/// database opened by a newer binary is upgraded on first touch.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
