use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_notifications, mark_notification_read};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::colors::{GREY, RESET, YELLOW};

/// List notifications or mark one as read.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notifications {
        user,
        unread,
        mark_read,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(id) = mark_read {
            if !mark_notification_read(&pool.conn, *id)? {
                return Err(AppError::Other(format!("Notification {} not found", id)));
            }
            success(format!("Notification {} marked as read.", id));
            return Ok(());
        }

        let notifications = load_notifications(&pool.conn, user.as_deref(), *unread)?;

        if notifications.is_empty() {
            println!("No notifications.");
            return Ok(());
        }

        for n in &notifications {
            let marker = if n.read {
                format!("{}·{}", GREY, RESET)
            } else {
                format!("{}●{}", YELLOW, RESET)
            };
            println!(
                "{} [{}] {} → {}: {}",
                marker, n.id, n.user_id, n.title, n.message
            );
        }
    }

    Ok(())
}
