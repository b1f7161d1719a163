use clap::{Parser, Subcommand};

/// Command-line interface definition for invigil
/// CLI application to manage exam invigilation requests with SQLite
#[derive(Parser)]
#[command(
    name = "invigil",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage exam invigilation requests: venue conflict checks, lifecycle and auto-completion using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Acting user id (defaults to "cli")
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Acting role: lecturer, coordinator or admin
    #[arg(global = true, long = "role")]
    pub role: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Submit a new invigilation request
    Add {
        #[arg(long, help = "Exam subject")]
        subject: String,

        #[arg(long, help = "Venue (room) to book")]
        venue: String,

        /// Exam date (YYYY-MM-DD)
        #[arg(long, help = "Exam date (YYYY-MM-DD)")]
        date: String,

        /// Exam slot, e.g. "09:00 - 12:00"
        #[arg(long, help = "Exam slot (\"HH:MM - HH:MM\")")]
        time: String,

        #[arg(long, help = "Lecturer name (defaults to the acting user)")]
        lecturer: Option<String>,

        #[arg(long = "students", default_value_t = 0, help = "Expected student count")]
        students: i64,

        #[arg(
            long = "invigilators",
            default_value_t = 1,
            help = "Invigilators needed (at least 1)"
        )]
        invigilators: i64,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,
    },

    /// List requests
    List {
        #[arg(long, help = "Filter by venue")]
        venue: Option<String>,

        #[arg(long, help = "Filter by date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(
            long,
            help = "Filter by status (requested, scheduled, confirmed, completed, cancelled, postponed)"
        )]
        status: Option<String>,

        #[arg(long, help = "Emit the matching requests as JSON")]
        json: bool,
    },

    /// Check whether a venue slot is free
    Check {
        #[arg(long, help = "Venue (room) to check")]
        venue: String,

        #[arg(long, help = "Date (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "Slot (\"HH:MM - HH:MM\")")]
        time: String,

        #[arg(long, help = "Request id to ignore (when re-checking an edit)")]
        exclude: Option<i64>,
    },

    /// Assign invigilators to a request (coordinator/admin)
    Assign {
        /// Request id
        id: i64,

        #[arg(
            long = "invigilator",
            required = true,
            help = "Invigilator user id (repeatable)"
        )]
        invigilators: Vec<String>,
    },

    /// Confirm an assigned or postponed request (coordinator/admin)
    Confirm {
        /// Request id
        id: i64,
    },

    /// Move a scheduled request to a new slot (coordinator/admin)
    Postpone {
        /// Request id
        id: i64,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "New slot (\"HH:MM - HH:MM\")")]
        time: String,
    },

    /// Cancel a request (requires a reason)
    Cancel {
        /// Request id
        id: i64,

        #[arg(long, help = "Reason for the cancellation (mandatory)")]
        reason: String,
    },

    /// Edit a request's fields; slot changes are re-checked for conflicts
    Edit {
        /// Request id
        id: i64,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New slot (\"HH:MM - HH:MM\")")]
        time: Option<String>,

        #[arg(long = "students")]
        students: Option<i64>,

        #[arg(long = "invigilators")]
        invigilators: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Auto-complete scheduled requests whose slot has passed
    Sweep {
        #[arg(long, help = "Keep running, sweeping on a fixed interval")]
        watch: bool,

        #[arg(long, help = "Tick period in seconds (default from config)")]
        interval: Option<u64>,
    },

    /// List or update in-app notifications
    Notifications {
        #[arg(long, help = "Only notifications addressed to this user")]
        user: Option<String>,

        #[arg(long, help = "Only unread notifications")]
        unread: bool,

        #[arg(long = "mark-read", help = "Mark a notification as read by id")]
        mark_read: Option<i64>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
