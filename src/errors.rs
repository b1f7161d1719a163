//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::collections::BTreeMap;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time range: '{0}' (expected \"HH:MM - HH:MM\")")]
    InvalidTimeRange(String),

    #[error("Invalid request status: {0}")]
    InvalidStatus(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Request validation / scheduling
    // ---------------------------
    #[error("{}", format_field_errors(.0))]
    Validation(BTreeMap<String, String>),

    #[error("Venue '{venue}' is already booked on {date} for a slot overlapping {time}")]
    VenueConflict {
        venue: String,
        date: String,
        time: String,
    },

    // ---------------------------
    // Lifecycle errors
    // ---------------------------
    #[error("Request {0} not found")]
    RequestNotFound(i64),

    #[error("Cannot {action} a request in status '{from}'")]
    InvalidTransition { from: String, action: String },

    #[error("User '{user}' ({role}) is not allowed to {action}")]
    NotAuthorized {
        user: String,
        role: String,
        action: String,
    },

    #[error("Cannot assign {requested} invigilators: request allows at most {limit}")]
    TooManyInvigilators { requested: usize, limit: usize },

    #[error("A non-empty reason is required to cancel a request")]
    MissingReason,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

/// Render per-field validation messages as a single line, field order stable.
fn format_field_errors(errors: &BTreeMap<String, String>) -> String {
    let fields: Vec<String> = errors
        .iter()
        .map(|(field, msg)| format!("{}: {}", field, msg))
        .collect();
    format!("Validation failed ({})", fields.join("; "))
}

pub type AppResult<T> = Result<T, AppError>;
