//! Kickstart - developer workstation bootstrapper
//!
//! Installs curated Homebrew packages and GUI applications through a bounded
//! pool of parallel workers, with a live progress line, classified failures
//! and a single retry of whatever failed.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod brew;
mod cli;
mod commands;
mod config;
mod error;
mod installer;
mod progress;
mod ui;

use cli::{Cli, Commands};

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "KICKSTART_LOG";

/// Install the stderr log subscriber
fn init_logging(verbose: bool) {
    let default = if verbose { "kickstart=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(command = ?cli.command, "kickstart starting");

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.config, cli.brew, args),
        Commands::Update(args) => commands::update::run(cli.config, cli.brew, args),
        Commands::Version => config::Config::load(cli.config.as_deref()).and_then(|config| {
            commands::version::run(&brew::BrewCli::new(
                config.brew_program(cli.brew.as_deref()),
            ))
        }),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
