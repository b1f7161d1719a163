use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::CancelLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::actor::ActorContext;

/// Cancel a request; the reason is mandatory.
pub fn handle(cmd: &Commands, cfg: &Config, actor: &ActorContext) -> AppResult<()> {
    if let Commands::Cancel { id, reason } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        CancelLogic::apply(&pool.conn, actor, *id, reason)?;
    }

    Ok(())
}
