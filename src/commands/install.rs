//! Install command implementation

use std::path::PathBuf;

use crate::brew::BrewCli;
use crate::cli::InstallArgs;
use crate::config::Config;
use crate::error::{Result, brew};
use crate::installer::{PassOptions, run_install_pass};
use crate::ui::{self, Confirm, DefaultAnswer, FixedAnswer, InquirePrompt};

/// Run install command
pub fn run(config_path: Option<PathBuf>, brew_path: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let config = Config::load(config_path.as_deref())?;
    let brew_cli = BrewCli::new(config.brew_program(brew_path.as_deref()));

    let (ordinary, gui) = package_lists(config, &args);
    if ordinary.is_empty() && gui.is_empty() {
        ui::muted("Nothing to install. Name packages on the command line or in kickstart.yaml.");
        return Ok(());
    }

    if args.dry_run {
        ui::muted("[DRY-RUN MODE - No changes will be made]");
    } else if !brew_cli.is_installed() {
        return Err(brew::not_installed(brew_cli.program().display().to_string()));
    }

    let options = PassOptions {
        dry_run: args.dry_run,
    };
    let confirm = retry_prompt(&args);
    let skipped = run_install_pass(&ordinary, &gui, &options, &brew_cli, confirm.as_ref())?;

    tracing::info!(skipped = skipped.len(), "install finished");
    Ok(())
}

/// Packages from the configuration file first, then the command line
fn package_lists(config: Config, args: &InstallArgs) -> (Vec<String>, Vec<String>) {
    let mut ordinary = config.packages;
    ordinary.extend(args.packages.iter().cloned());
    let mut gui = config.casks;
    gui.extend(args.casks.iter().cloned());
    (ordinary, gui)
}

/// How the retry question gets answered
fn retry_prompt(args: &InstallArgs) -> Box<dyn Confirm> {
    if args.no_retry {
        Box::new(FixedAnswer(false))
    } else if args.yes || !console::user_attended() {
        Box::new(DefaultAnswer)
    } else {
        Box::new(InquirePrompt)
    }
}
