use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::AssignLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::actor::ActorContext;

/// Assign invigilators to a request.
pub fn handle(cmd: &Commands, cfg: &Config, actor: &ActorContext) -> AppResult<()> {
    if let Commands::Assign { id, invigilators } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        AssignLogic::apply(&pool.conn, actor, *id, invigilators)?;
    }

    Ok(())
}
