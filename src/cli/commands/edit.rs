use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::{EditLogic, EditPatch};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::actor::ActorContext;

/// Edit fields of an existing request.
pub fn handle(cmd: &Commands, cfg: &Config, actor: &ActorContext) -> AppResult<()> {
    if let Commands::Edit {
        id,
        subject,
        venue,
        date,
        time,
        students,
        invigilators,
        notes,
    } = cmd
    {
        let patch = EditPatch {
            subject: subject.clone(),
            venue: venue.clone(),
            date: date.clone(),
            time: time.clone(),
            student_count: *students,
            invigilator_count: *invigilators,
            notes: notes.clone(),
        };

        let pool = DbPool::new(&cfg.database)?;
        EditLogic::apply(&pool.conn, actor, *id, &patch)?;
    }

    Ok(())
}
