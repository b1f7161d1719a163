/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Status color for listings:
/// requested → yellow, scheduled (assigned/confirmed) → green,
/// postponed → magenta, completed → grey, cancelled → red.
pub fn color_for_status(status: &crate::models::status::RequestStatus) -> &'static str {
    use crate::models::status::RequestStatus::*;
    match status {
        Requested => YELLOW,
        Assigned | Confirmed => GREEN,
        Postponed => MAGENTA,
        Completed => GREY,
        Cancelled => RED,
    }
}
