//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - update: Update command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod update;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use update::UpdateArgs;

/// Kickstart - developer workstation bootstrapper
///
/// Install a curated set of Homebrew packages in parallel with live progress.
#[derive(Parser, Debug)]
#[command(
    name = "kickstart",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bootstrap a developer workstation with Homebrew",
    long_about = "Kickstart installs command-line packages and GUI applications through \
                  Homebrew, running several installs in parallel, classifying failures and \
                  offering a single retry of whatever failed.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  kickstart install git ripgrep           \x1b[90m# Install command-line packages\x1b[0m\n   \
                  kickstart install --cask firefox        \x1b[90m# Install a GUI application\x1b[0m\n   \
                  kickstart install --dry-run             \x1b[90m# Preview packages from kickstart.yaml\x1b[0m\n   \
                  kickstart update                        \x1b[90m# Upgrade outdated packages\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/kickstart/kickstart.yaml)
    #[arg(long, global = true, env = "KICKSTART_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the brew binary
    #[arg(long, global = true, env = "KICKSTART_BREW", value_name = "PATH")]
    pub brew: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install packages and GUI applications
    Install(InstallArgs),

    /// Update Homebrew and upgrade all packages
    Update(UpdateArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
