//! Update command implementation

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::brew::BrewCli;
use crate::cli::UpdateArgs;
use crate::config::Config;
use crate::error::{Result, brew};
use crate::ui;

/// Run update command
pub fn run(config_path: Option<PathBuf>, brew_path: Option<PathBuf>, args: UpdateArgs) -> Result<()> {
    let config = Config::load(config_path.as_deref())?;
    let brew_cli = BrewCli::new(config.brew_program(brew_path.as_deref()));

    println!();
    ui::header("Kickstart Update");
    println!();

    if args.dry_run {
        ui::muted("[DRY-RUN MODE - No changes will be made]");
        println!();
    }

    if !brew_cli.is_installed() {
        return Err(brew::not_installed(brew_cli.program().display().to_string()));
    }

    ui::info("Checking for outdated packages...");
    match brew_cli.list_outdated() {
        Err(e) => ui::error(&format!("Failed to check outdated packages: {e}")),
        Ok(outdated) if outdated.is_empty() => {
            ui::success("All packages are up to date!");
            println!();
            return Ok(());
        }
        Ok(outdated) => {
            println!();
            ui::info(&format!("Found {} outdated:", ui::packages(outdated.len())));
            for pkg in &outdated {
                println!("  {}: {} -> {}", pkg.name, pkg.current, pkg.latest);
            }
            println!();
        }
    }

    if args.dry_run {
        ui::info("Would run: brew update && brew upgrade && brew cleanup");
        return Ok(());
    }

    with_spinner("Updating Homebrew...", || brew_cli.update())?;
    with_spinner("Upgrading packages...", || brew_cli.upgrade())?;
    if let Err(e) = with_spinner("Cleaning up old versions...", || brew_cli.cleanup()) {
        tracing::warn!("cleanup failed: {e}");
    }

    println!();
    ui::success("Update complete!");
    println!();
    Ok(())
}

fn with_spinner<T>(message: &'static str, op: impl FnOnce() -> Result<T>) -> Result<T> {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = op();
    match result {
        Ok(_) => spinner.finish_with_message(format!("{message} done")),
        Err(_) => spinner.abandon_with_message(format!("{message} failed")),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KickstartError;

    #[test]
    fn test_with_spinner_passes_result_through() {
        assert_eq!(with_spinner("Working...", || Ok(7)).unwrap(), 7);
        let err = with_spinner::<()>("Working...", || {
            Err(brew::command_failed("brew update", "offline"))
        });
        assert!(matches!(err, Err(KickstartError::BrewCommandFailed { .. })));
    }

    #[test]
    fn test_missing_brew_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = temp.path().join("kickstart.yaml");
        std::fs::write(&config, "brew: /nonexistent/brew\n").unwrap();
        let result = run(Some(config), None, UpdateArgs { dry_run: true });
        assert!(matches!(result, Err(KickstartError::BrewNotInstalled { .. })));
    }
}
