use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;

        for (date, operation, target, message) in load_log(&pool.conn)? {
            println!(
                "{}{}{} {}{:<9}{} [{}] {}",
                GREY, date, RESET, CYAN, operation, RESET, target, message
            );
        }
    }

    Ok(())
}
