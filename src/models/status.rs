use serde::Serialize;

/// Authoritative lifecycle status of an invigilation request.
///
/// `Assigned` and `Confirmed` are rendered as "Scheduled" in listings, but the
/// display label is never persisted; the enum is the single source of truth.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RequestStatus {
    Requested,
    Assigned,
    Confirmed,
    Completed,
    Cancelled,
    Postponed,
}

impl RequestStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RequestStatus::Requested => "requested",
            RequestStatus::Assigned => "assigned",
            RequestStatus::Confirmed => "confirmed",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
            RequestStatus::Postponed => "postponed",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "requested" => Some(RequestStatus::Requested),
            "assigned" => Some(RequestStatus::Assigned),
            "confirmed" => Some(RequestStatus::Confirmed),
            "completed" => Some(RequestStatus::Completed),
            "cancelled" => Some(RequestStatus::Cancelled),
            "postponed" => Some(RequestStatus::Postponed),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        RequestStatus::from_db_str(&code.to_lowercase())
    }

    /// Label shown to users; assigned/confirmed requests read as scheduled.
    pub fn display_label(&self) -> &'static str {
        match self {
            RequestStatus::Requested => "Requested",
            RequestStatus::Assigned | RequestStatus::Confirmed => "Scheduled",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
            RequestStatus::Postponed => "Postponed",
        }
    }

    /// A request holding a venue slot: it blocks conflicting bookings and is
    /// eligible for auto-completion.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, RequestStatus::Assigned | RequestStatus::Confirmed)
    }

    /// Completed and cancelled requests accept no further edits or transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Cancelled)
    }
}
