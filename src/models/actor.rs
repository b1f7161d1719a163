use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Lecturer,
    Coordinator,
    Admin,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Lecturer => "lecturer",
            Role::Coordinator => "coordinator",
            Role::Admin => "admin",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "lecturer" => Some(Role::Lecturer),
            "coordinator" => Some(Role::Coordinator),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Helper: convert input from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        Role::from_db_str(&code.to_lowercase())
    }

    /// Coordinators and admins manage scheduling (assign, confirm, postpone).
    pub fn can_schedule(&self) -> bool {
        matches!(self, Role::Coordinator | Role::Admin)
    }
}

/// The acting user, passed explicitly into every lifecycle and validation
/// call rather than read from ambient state.
#[derive(Debug, Clone)]
pub struct ActorContext {
    pub user_id: String,
    pub role: Role,
}

impl ActorContext {
    /// Build the actor from the global CLI flags, falling back to the
    /// configured default role when --role is omitted.
    pub fn from_cli(cli: &Cli, cfg: &Config) -> AppResult<Self> {
        let role_code = cli
            .role
            .clone()
            .unwrap_or_else(|| cfg.default_role.clone());
        let role =
            Role::from_code(&role_code).ok_or_else(|| AppError::InvalidRole(role_code.clone()))?;

        Ok(Self {
            user_id: cli.user.clone().unwrap_or_else(|| "cli".to_string()),
            role,
        })
    }

    /// Cancellation is open to schedulers and to the requester themselves.
    pub fn can_cancel(&self, requester: &str) -> bool {
        self.role.can_schedule() || self.user_id == requester
    }

    /// Edits follow the same rule as cancellation.
    pub fn can_edit(&self, requester: &str) -> bool {
        self.can_cancel(requester)
    }
}
