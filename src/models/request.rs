use super::status::RequestStatus;
use crate::core::timerange::TimeRange;
use crate::errors::AppResult;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A persisted invigilation request.
#[derive(Debug, Clone, Serialize)]
pub struct InvigilationRequest {
    pub id: i64,
    pub subject: String,
    pub venue: String,
    pub lecturer: String,
    pub user_id: String,          // ⇔ requests.user_id (requester)
    pub date: NaiveDate,          // ⇔ requests.date (TEXT "YYYY-MM-DD")
    pub time: String,             // ⇔ requests.time (TEXT "HH:MM - HH:MM")
    pub student_count: i64,       // ≥ 0
    pub invigilator_count: i64,   // ≥ 1
    pub status: RequestStatus,    // ⇔ requests.status
    pub assigned: Vec<String>,    // ⇔ assignments rows, |assigned| ≤ invigilator_count
    pub notes: String,
    pub created_at: String,       // ISO8601, set by the store on insert
    pub updated_at: String,       // ISO8601, set by the store on every write
}

impl InvigilationRequest {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Parsed start/end of the booked slot, in minutes since midnight.
    pub fn time_range(&self) -> AppResult<TimeRange> {
        TimeRange::parse(&self.time)
    }
}

/// Unvalidated field bag for a request about to be created or edited.
/// `core::validate` turns this into per-field error messages; only a draft
/// that validates cleanly reaches the store.
#[derive(Debug, Clone, Default)]
pub struct RequestDraft {
    pub subject: String,
    pub venue: String,
    pub lecturer: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub student_count: i64,
    pub invigilator_count: i64,
    pub notes: String,
}

impl RequestDraft {
    /// Materialize a validated draft into a request ready for insertion.
    /// The caller guarantees `validate()` returned no errors, so the date
    /// parse here cannot fail in practice; it is still propagated.
    pub fn into_request(self) -> AppResult<InvigilationRequest> {
        let date = crate::utils::date::parse_date(self.date.trim())
            .ok_or_else(|| crate::errors::AppError::InvalidDate(self.date.clone()))?;
        let now = Local::now().to_rfc3339();

        Ok(InvigilationRequest {
            id: 0,
            subject: self.subject,
            venue: self.venue,
            lecturer: self.lecturer,
            user_id: self.user_id,
            date,
            time: self.time,
            student_count: self.student_count,
            invigilator_count: self.invigilator_count,
            status: RequestStatus::Requested,
            assigned: Vec::new(),
            notes: self.notes,
            created_at: now.clone(),
            updated_at: now,
        })
    }
}
