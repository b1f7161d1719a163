use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::ConfirmLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::actor::ActorContext;

/// Confirm an assigned or postponed request.
pub fn handle(cmd: &Commands, cfg: &Config, actor: &ActorContext) -> AppResult<()> {
    if let Commands::Confirm { id } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        ConfirmLogic::apply(&pool.conn, actor, *id)?;
    }

    Ok(())
}
