use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print a short summary of the database: file size, request counts by
/// status, venues in use, date range, pending notifications.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM requests", [], |row| row.get(0))?;
    println!(
        "{}• Total requests:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    println!("{}• By status:{}", CYAN, RESET);
    let mut stmt = pool
        .conn
        .prepare("SELECT status, COUNT(*) FROM requests GROUP BY status ORDER BY status")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    for r in rows {
        let (status, n) = r?;
        println!("    {:<10} {}", status, n);
    }

    let venues: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT venue) FROM requests", [], |row| {
            row.get(0)
        })?;
    println!("{}• Venues in use:{} {}", CYAN, RESET, venues);

    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM requests ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM requests ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    let unread: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM notifications WHERE is_read = 0",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Unread notifications:{} {}", CYAN, RESET, unread);

    println!();
    Ok(())
}
