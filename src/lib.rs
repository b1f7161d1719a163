//! invigil library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::actor::ActorContext;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // Every mutating command receives the acting user explicitly; nothing
    // reads identity from ambient state.
    let actor = ActorContext::from_cli(cli, cfg)?;

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, &actor),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, &actor),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Assign { .. } => cli::commands::assign::handle(&cli.command, cfg, &actor),
        Commands::Confirm { .. } => cli::commands::confirm::handle(&cli.command, cfg, &actor),
        Commands::Postpone { .. } => cli::commands::postpone::handle(&cli.command, cfg, &actor),
        Commands::Cancel { .. } => cli::commands::cancel::handle(&cli.command, cfg, &actor),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, &actor),
        Commands::Sweep { .. } => cli::commands::sweep::handle(&cli.command, cfg),
        Commands::Notifications { .. } => cli::commands::notifications::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once; the --db flag overrides the configured path.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
