use serde::Serialize;

/// Lifecycle event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationKind {
    Created,
    Assigned,
    Confirmed,
    Postponed,
    Cancelled,
    Completed,
}

impl NotificationKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            NotificationKind::Created => "created",
            NotificationKind::Assigned => "assigned",
            NotificationKind::Confirmed => "confirmed",
            NotificationKind::Postponed => "postponed",
            NotificationKind::Cancelled => "cancelled",
            NotificationKind::Completed => "completed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "created" => Some(NotificationKind::Created),
            "assigned" => Some(NotificationKind::Assigned),
            "confirmed" => Some(NotificationKind::Confirmed),
            "postponed" => Some(NotificationKind::Postponed),
            "cancelled" => Some(NotificationKind::Cancelled),
            "completed" => Some(NotificationKind::Completed),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Created => "Invigilation requested",
            NotificationKind::Assigned => "Invigilation duty assigned",
            NotificationKind::Confirmed => "Invigilation confirmed",
            NotificationKind::Postponed => "Invigilation postponed",
            NotificationKind::Cancelled => "Invigilation cancelled",
            NotificationKind::Completed => "Invigilation completed",
        }
    }
}

/// An in-app notification row addressed to a single user.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: String, // ISO8601
}
