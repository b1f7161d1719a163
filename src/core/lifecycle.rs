//! Business logic for the request lifecycle:
//!
//! ```text
//! requested --(assign)--> assigned --(confirm)--> confirmed
//! assigned|confirmed --(postpone)--> postponed --(confirm)--> confirmed
//! requested|assigned|confirmed|postponed --(cancel + reason)--> cancelled
//! assigned|confirmed --(sweep, wall clock past end)--> completed
//! ```
//!
//! Completed and cancelled are terminal: every further edit or transition is
//! refused.

use crate::core::availability::ensure_available;
use crate::core::notify::fan_out;
use crate::core::timerange::TimeRange;
use crate::core::validate::validate;
use crate::db::log::ttlog;
use crate::db::queries::{
    insert_assignment, insert_request, load_request, update_request, update_status,
};
use crate::errors::{AppError, AppResult};
use crate::models::actor::ActorContext;
use crate::models::notification::NotificationKind;
use crate::models::request::{InvigilationRequest, RequestDraft};
use crate::models::status::RequestStatus;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use rusqlite::Connection;
use std::collections::BTreeSet;

fn ensure_not_terminal(req: &InvigilationRequest, action: &str) -> AppResult<()> {
    if req.status.is_terminal() {
        return Err(AppError::InvalidTransition {
            from: req.status.to_db_str().to_string(),
            action: action.to_string(),
        });
    }
    Ok(())
}

fn not_authorized(actor: &ActorContext, action: &str) -> AppError {
    AppError::NotAuthorized {
        user: actor.user_id.clone(),
        role: actor.role.to_db_str().to_string(),
        action: action.to_string(),
    }
}

/// High-level business logic for the `add` command.
pub struct CreateLogic;

impl CreateLogic {
    /// Validate the draft, check the venue slot, and persist the request as
    /// `requested`. Any role may submit.
    pub fn apply(
        conn: &Connection,
        actor: &ActorContext,
        draft: RequestDraft,
    ) -> AppResult<InvigilationRequest> {
        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        ensure_available(conn, &draft.venue, draft.date.trim(), &draft.time, None)?;

        let mut req = draft.into_request()?;
        req.id = insert_request(conn, &req)?;

        ttlog(
            conn,
            "add",
            &req.id.to_string(),
            &format!(
                "Request created by {}: {} at {} on {} ({})",
                actor.user_id,
                req.subject,
                req.venue,
                req.date_str(),
                req.time
            ),
        )?;
        fan_out(conn, NotificationKind::Created, &req, None)?;

        success(format!(
            "Request {} created: {} at {} on {} ({}).",
            req.id,
            req.subject,
            req.venue,
            req.date_str(),
            req.time
        ));

        Ok(req)
    }
}

/// High-level business logic for the `assign` command.
pub struct AssignLogic;

impl AssignLogic {
    /// Attach invigilators to a request and move it to `assigned`.
    /// Coordinator/admin only; the assigned set may never exceed
    /// `invigilator_count`.
    pub fn apply(
        conn: &Connection,
        actor: &ActorContext,
        id: i64,
        invigilators: &[String],
    ) -> AppResult<InvigilationRequest> {
        if !actor.role.can_schedule() {
            return Err(not_authorized(actor, "assign invigilators"));
        }

        let req = load_request(conn, id)?;
        ensure_not_terminal(&req, "assign invigilators to")?;

        if !matches!(
            req.status,
            RequestStatus::Requested | RequestStatus::Assigned
        ) {
            return Err(AppError::InvalidTransition {
                from: req.status.to_db_str().to_string(),
                action: "assign invigilators to".to_string(),
            });
        }

        let mut combined: BTreeSet<String> = req.assigned.iter().cloned().collect();
        for user in invigilators {
            combined.insert(user.clone());
        }

        if combined.len() as i64 > req.invigilator_count {
            return Err(AppError::TooManyInvigilators {
                requested: combined.len(),
                limit: req.invigilator_count as usize,
            });
        }

        for user in invigilators {
            insert_assignment(conn, id, user)?;
        }
        update_status(conn, id, RequestStatus::Assigned)?;

        let updated = load_request(conn, id)?;
        ttlog(
            conn,
            "assign",
            &id.to_string(),
            &format!(
                "{} assigned [{}] to request {}",
                actor.user_id,
                invigilators.join(", "),
                id
            ),
        )?;
        fan_out(conn, NotificationKind::Assigned, &updated, None)?;

        success(format!(
            "Request {} assigned to {} invigilator(s).",
            id,
            updated.assigned.len()
        ));

        Ok(updated)
    }
}

/// High-level business logic for the `confirm` command.
pub struct ConfirmLogic;

impl ConfirmLogic {
    /// Move an assigned or postponed request to `confirmed`.
    pub fn apply(conn: &Connection, actor: &ActorContext, id: i64) -> AppResult<InvigilationRequest> {
        if !actor.role.can_schedule() {
            return Err(not_authorized(actor, "confirm the request"));
        }

        let req = load_request(conn, id)?;
        ensure_not_terminal(&req, "confirm")?;

        if !matches!(
            req.status,
            RequestStatus::Assigned | RequestStatus::Postponed
        ) {
            return Err(AppError::InvalidTransition {
                from: req.status.to_db_str().to_string(),
                action: "confirm".to_string(),
            });
        }

        // A postponed request released its slot; someone else may have
        // booked it in the meantime, so the venue is re-checked before the
        // request becomes scheduled again.
        if req.status == RequestStatus::Postponed {
            ensure_available(conn, &req.venue, &req.date_str(), &req.time, Some(id))?;
        }

        update_status(conn, id, RequestStatus::Confirmed)?;

        let updated = load_request(conn, id)?;
        ttlog(
            conn,
            "confirm",
            &id.to_string(),
            &format!("Request {} confirmed by {}", id, actor.user_id),
        )?;
        fan_out(conn, NotificationKind::Confirmed, &updated, None)?;

        success(format!("Request {} confirmed.", id));

        Ok(updated)
    }
}

/// High-level business logic for the `cancel` command.
pub struct CancelLogic;

impl CancelLogic {
    /// Cancel a request before completion. A non-empty reason is mandatory;
    /// schedulers and the requester themselves may cancel.
    pub fn apply(
        conn: &Connection,
        actor: &ActorContext,
        id: i64,
        reason: &str,
    ) -> AppResult<InvigilationRequest> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::MissingReason);
        }

        let mut req = load_request(conn, id)?;
        ensure_not_terminal(&req, "cancel")?;

        if !actor.can_cancel(&req.user_id) {
            return Err(not_authorized(actor, "cancel this request"));
        }

        req.status = RequestStatus::Cancelled;
        req.notes = if req.notes.trim().is_empty() {
            format!("Cancelled: {}", reason)
        } else {
            format!("{}\nCancelled: {}", req.notes, reason)
        };
        update_request(conn, &req)?;

        let updated = load_request(conn, id)?;
        ttlog(
            conn,
            "cancel",
            &id.to_string(),
            &format!("Request {} cancelled by {}: {}", id, actor.user_id, reason),
        )?;
        fan_out(
            conn,
            NotificationKind::Cancelled,
            &updated,
            Some(&format!("Reason: {}", reason)),
        )?;

        success(format!("Request {} cancelled.", id));

        Ok(updated)
    }
}

/// High-level business logic for the `postpone` command.
pub struct PostponeLogic;

impl PostponeLogic {
    /// Move a scheduled request to a new slot. The new slot is re-checked
    /// against the venue (excluding the request itself) before the write.
    pub fn apply(
        conn: &Connection,
        actor: &ActorContext,
        id: i64,
        new_date: &str,
        new_time: &str,
    ) -> AppResult<InvigilationRequest> {
        if !actor.role.can_schedule() {
            return Err(not_authorized(actor, "postpone the request"));
        }

        let mut req = load_request(conn, id)?;
        ensure_not_terminal(&req, "postpone")?;

        if !req.status.is_scheduled() {
            return Err(AppError::InvalidTransition {
                from: req.status.to_db_str().to_string(),
                action: "postpone".to_string(),
            });
        }

        let date = parse_date(new_date.trim())
            .ok_or_else(|| AppError::InvalidDate(new_date.to_string()))?;
        TimeRange::parse(new_time)?;

        ensure_available(conn, &req.venue, new_date.trim(), new_time, Some(id))?;

        req.date = date;
        req.time = new_time.trim().to_string();
        req.status = RequestStatus::Postponed;
        update_request(conn, &req)?;

        let updated = load_request(conn, id)?;
        ttlog(
            conn,
            "postpone",
            &id.to_string(),
            &format!(
                "Request {} postponed by {} to {} ({})",
                id,
                actor.user_id,
                updated.date_str(),
                updated.time
            ),
        )?;
        fan_out(conn, NotificationKind::Postponed, &updated, None)?;

        success(format!(
            "Request {} postponed to {} ({}).",
            id,
            updated.date_str(),
            updated.time
        ));

        Ok(updated)
    }
}

/// Optional field changes applied by the `edit` command.
#[derive(Debug, Clone, Default)]
pub struct EditPatch {
    pub subject: Option<String>,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub student_count: Option<i64>,
    pub invigilator_count: Option<i64>,
    pub notes: Option<String>,
}

/// High-level business logic for the `edit` command.
pub struct EditLogic;

impl EditLogic {
    /// Apply field changes to a non-terminal request. The patched draft is
    /// re-validated in full, and a changed venue/date/time is re-checked
    /// against the venue calendar (excluding the request itself).
    pub fn apply(
        conn: &Connection,
        actor: &ActorContext,
        id: i64,
        patch: &EditPatch,
    ) -> AppResult<InvigilationRequest> {
        let mut req = load_request(conn, id)?;
        ensure_not_terminal(&req, "edit")?;

        if !actor.can_edit(&req.user_id) {
            return Err(not_authorized(actor, "edit this request"));
        }

        let draft = RequestDraft {
            subject: patch.subject.clone().unwrap_or_else(|| req.subject.clone()),
            venue: patch.venue.clone().unwrap_or_else(|| req.venue.clone()),
            lecturer: req.lecturer.clone(),
            user_id: req.user_id.clone(),
            date: patch.date.clone().unwrap_or_else(|| req.date_str()),
            time: patch.time.clone().unwrap_or_else(|| req.time.clone()),
            student_count: patch.student_count.unwrap_or(req.student_count),
            invigilator_count: patch.invigilator_count.unwrap_or(req.invigilator_count),
            notes: patch.notes.clone().unwrap_or_else(|| req.notes.clone()),
        };

        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        if (draft.invigilator_count as usize) < req.assigned.len() {
            return Err(AppError::TooManyInvigilators {
                requested: req.assigned.len(),
                limit: draft.invigilator_count as usize,
            });
        }

        let slot_changed = patch.venue.is_some() || patch.date.is_some() || patch.time.is_some();
        if slot_changed {
            ensure_available(conn, &draft.venue, draft.date.trim(), &draft.time, Some(id))?;
        }

        req.subject = draft.subject;
        req.venue = draft.venue;
        req.date = parse_date(draft.date.trim())
            .ok_or_else(|| AppError::InvalidDate(draft.date.clone()))?;
        req.time = draft.time.trim().to_string();
        req.student_count = draft.student_count;
        req.invigilator_count = draft.invigilator_count;
        req.notes = draft.notes;
        update_request(conn, &req)?;

        let updated = load_request(conn, id)?;
        ttlog(
            conn,
            "edit",
            &id.to_string(),
            &format!("Request {} edited by {}", id, actor.user_id),
        )?;

        success(format!("Request {} updated.", id));

        Ok(updated)
    }
}
