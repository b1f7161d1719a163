use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::availability::check_availability;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Report whether a venue slot is free. Exit code stays 0 either way; the
/// answer is the output.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        venue,
        date,
        time,
        exclude,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if check_availability(&pool.conn, venue, date, time, *exclude)? {
            success(format!("{} is free on {} ({}).", venue, date, time));
        } else {
            warning(format!(
                "{} is already booked on {} for a slot overlapping {}.",
                venue, date, time
            ));
        }
    }

    Ok(())
}
