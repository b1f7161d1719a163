use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sweep::run_sweep;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{minute_of_day, today};
use std::thread;
use std::time::Duration;

/// Run the auto-completion sweep, once or on a fixed interval.
/// Meant to run centrally (cron, or one `--watch` process), never per client.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sweep { watch, interval } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let period = interval.unwrap_or(cfg.sweep_interval_secs).max(1);

        loop {
            let outcome = run_sweep(&pool.conn, today(), minute_of_day())?;

            for (id, err) in &outcome.skipped {
                warning(format!("Request {} has an unparseable slot: {}", id, err));
            }

            if outcome.completed.is_empty() {
                info(format!(
                    "Sweep: {} scheduled request(s) scanned, nothing due.",
                    outcome.scanned
                ));
            } else {
                success(format!(
                    "Sweep: completed request(s) {}.",
                    outcome
                        .completed
                        .iter()
                        .map(|id| id.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }

            if !*watch {
                break;
            }
            thread::sleep(Duration::from_secs(period));
        }
    }

    Ok(())
}
