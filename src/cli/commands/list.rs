use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_notifications, load_requests};
use crate::errors::{AppError, AppResult};
use crate::models::actor::ActorContext;
use crate::models::status::RequestStatus;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::table::{Column, Table};

/// List requests, as a table or as JSON.
pub fn handle(cmd: &Commands, cfg: &Config, actor: &ActorContext) -> AppResult<()> {
    if let Commands::List {
        venue,
        date,
        status,
        json,
    } = cmd
    {
        // "scheduled" is a display filter covering both persisted statuses.
        let statuses: Vec<RequestStatus> = match status.as_deref() {
            None => Vec::new(),
            Some(code) if code.eq_ignore_ascii_case("scheduled") => {
                vec![RequestStatus::Assigned, RequestStatus::Confirmed]
            }
            Some(code) => vec![
                RequestStatus::from_code(code)
                    .ok_or_else(|| AppError::InvalidStatus(code.to_string()))?,
            ],
        };

        let pool = DbPool::new(&cfg.database)?;
        let requests = load_requests(&pool.conn, venue.as_deref(), date.as_deref(), &statuses)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&requests)?);
            return Ok(());
        }

        if requests.is_empty() {
            println!("No requests found.");
        } else {
            render_table(cfg, &requests);
        }

        if cfg.show_notifications_on_list {
            let unread = load_notifications(&pool.conn, Some(&actor.user_id), true)?;
            if !unread.is_empty() {
                info(format!(
                    "{} has {} unread notification(s). See `invigil notifications --user {} --unread`.",
                    actor.user_id,
                    unread.len(),
                    actor.user_id
                ));
            }
        }
    }

    Ok(())
}

fn render_table(cfg: &Config, requests: &[crate::models::request::InvigilationRequest]) {
    let mut table = Table::new(vec![
        Column { header: "ID".into(), width: 4 },
        Column { header: "Date".into(), width: 10 },
        Column { header: "Time".into(), width: 13 },
        Column { header: "Venue".into(), width: 14 },
        Column { header: "Subject".into(), width: 24 },
        Column { header: "Invig.".into(), width: 6 },
        Column { header: "Status".into(), width: 10 },
    ])
    .with_separator(&cfg.separator_char);

    for req in requests {
        table.add_row(vec![
            req.id.to_string(),
            req.date_str(),
            req.time.clone(),
            req.venue.clone(),
            req.subject.clone(),
            format!("{}/{}", req.assigned.len(), req.invigilator_count),
            format!(
                "{}{}{}",
                color_for_status(&req.status),
                req.status.display_label(),
                RESET
            ),
        ]);
    }

    println!("{}", table.render());
}
