use clap::Parser;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "This command will:\n  \
                   1. Show currently outdated packages\n  \
                   2. Update Homebrew itself\n  \
                   3. Upgrade all outdated packages\n  \
                   4. Clean up old versions")]
pub struct UpdateArgs {
    /// Show what would be updated without updating
    #[arg(long)]
    pub dry_run: bool,
}
