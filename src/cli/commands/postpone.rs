use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::PostponeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::actor::ActorContext;

/// Move a scheduled request to a new slot.
pub fn handle(cmd: &Commands, cfg: &Config, actor: &ActorContext) -> AppResult<()> {
    if let Commands::Postpone { id, date, time } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        PostponeLogic::apply(&pool.conn, actor, *id, date, time)?;
    }

    Ok(())
}
