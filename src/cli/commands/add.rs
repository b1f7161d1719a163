use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::CreateLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::actor::ActorContext;
use crate::models::request::RequestDraft;
use crate::ui::messages::error;

/// Submit a new invigilation request.
pub fn handle(cmd: &Commands, cfg: &Config, actor: &ActorContext) -> AppResult<()> {
    if let Commands::Add {
        subject,
        venue,
        date,
        time,
        lecturer,
        students,
        invigilators,
        notes,
    } = cmd
    {
        let draft = RequestDraft {
            subject: subject.clone(),
            venue: venue.clone(),
            lecturer: lecturer.clone().unwrap_or_else(|| actor.user_id.clone()),
            user_id: actor.user_id.clone(),
            date: date.clone(),
            time: time.clone(),
            student_count: *students,
            invigilator_count: *invigilators,
            notes: notes.clone().unwrap_or_default(),
        };

        let pool = DbPool::new(&cfg.database)?;

        match CreateLogic::apply(&pool.conn, actor, draft) {
            Ok(_) => {}
            // Per-field messages are printed one by one before failing.
            Err(AppError::Validation(errors)) => {
                for (field, msg) in &errors {
                    error(format!("{}: {}", field, msg));
                }
                return Err(AppError::Validation(errors));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
