//! Layerpaint CLI
//!
//! Command-line driver for scripted paint sessions.

use clap::Parser;
use env_logger::Env;
use log::info;

use layerpaint::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Layerpaint v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Layers => commands::list_layers(),
        Commands::Run {
            script,
            session,
            format,
            replay,
        } => commands::run(&script, &session, format, replay),
        Commands::History { script, session } => commands::show_history(&script, &session),
    }
}
