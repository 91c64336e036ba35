use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install command-line packages:\n    kickstart install git ripgrep jq\n\n\
                   Install GUI applications:\n    kickstart install --cask firefox --cask slack\n\n\
                   Preview without installing:\n    kickstart install git --cask firefox --dry-run\n\n\
                   Install the packages listed in kickstart.yaml:\n    kickstart install")]
pub struct InstallArgs {
    /// Command-line packages to install, in addition to those in kickstart.yaml
    pub packages: Vec<String>,

    /// GUI applications to install (repeatable)
    #[arg(long = "cask", short = 'c', value_name = "NAME")]
    pub casks: Vec<String>,

    /// Show the commands that would run without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Retry failed packages without asking
    #[arg(long, short = 'y', conflicts_with = "no_retry")]
    pub yes: bool,

    /// Skip failed packages without asking
    #[arg(long)]
    pub no_retry: bool,
}
