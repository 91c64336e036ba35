//! Homebrew command wrapper
//!
//! [`BrewCli`] is the concrete [`InstallBackend`]: every install runs the
//! `brew` binary as a child process and captures its combined output. It also
//! covers the maintenance commands used by `kickstart update`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde::Deserialize;

use crate::error::{Result, brew};
use crate::installer::{AttemptOutput, InstallBackend, InstallJob, JobKind};

/// Package whose installed version is behind the latest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedPackage {
    /// Formula name, or `name (cask)` for casks
    pub name: String,
    pub current: String,
    pub latest: String,
}

#[derive(Debug, Deserialize)]
struct OutdatedReport {
    #[serde(default)]
    formulae: Vec<OutdatedEntry>,
    #[serde(default)]
    casks: Vec<OutdatedEntry>,
}

#[derive(Debug, Deserialize)]
struct OutdatedEntry {
    name: String,
    #[serde(default)]
    installed_versions: Vec<String>,
    #[serde(default)]
    current_version: String,
}

/// The `brew` command-line tool
#[derive(Debug, Clone)]
pub struct BrewCli {
    program: PathBuf,
}

impl BrewCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Whether the binary can be started at all
    pub fn is_installed(&self) -> bool {
        self.command(["--version"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    /// `brew outdated --json`
    pub fn list_outdated(&self) -> Result<Vec<OutdatedPackage>> {
        let output = self.checked_output(&["outdated", "--json"])?;
        parse_outdated(&String::from_utf8_lossy(&output.stdout))
    }

    /// `brew update`
    pub fn update(&self) -> Result<()> {
        self.checked_output(&["update"]).map(|_| ())
    }

    /// `brew upgrade`
    pub fn upgrade(&self) -> Result<()> {
        self.checked_output(&["upgrade"]).map(|_| ())
    }

    /// `brew cleanup`
    pub fn cleanup(&self) -> Result<()> {
        self.checked_output(&["cleanup"]).map(|_| ())
    }

    fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null());
        // Keep brew from prompting or auto-updating in the middle of a pass.
        cmd.env("HOMEBREW_NO_AUTO_UPDATE", "1")
            .env("HOMEBREW_NO_INSTALL_CLEANUP", "1")
            .env("NONINTERACTIVE", "1");
        cmd
    }

    fn display(&self, args: &[&str]) -> String {
        format!("brew {}", args.join(" "))
    }

    fn checked_output(&self, args: &[&str]) -> Result<Output> {
        let output = self
            .command(args)
            .output()
            .map_err(|e| brew::command_failed(self.display(args), e.to_string()))?;
        if output.status.success() {
            Ok(output)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr
                .lines()
                .find(|line| !line.trim().is_empty())
                .map_or_else(|| output.status.to_string(), ToString::to_string);
            Err(brew::command_failed(self.display(args), reason))
        }
    }

    fn install(&self, args: &[&str]) -> AttemptOutput {
        match self.command(args).output() {
            Ok(output) => {
                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));
                AttemptOutput {
                    success: output.status.success(),
                    output: combined,
                }
            }
            Err(e) => {
                tracing::warn!(
                    program = %self.program.display(),
                    "failed to run {}: {e}",
                    self.display(args)
                );
                AttemptOutput::failure(e.to_string())
            }
        }
    }
}

impl InstallBackend for BrewCli {
    fn install_ordinary(&self, name: &str) -> AttemptOutput {
        self.install(&["install", name])
    }

    fn install_gui(&self, name: &str) -> AttemptOutput {
        self.install(&["install", "--cask", name])
    }

    fn preview(&self, job: &InstallJob) -> String {
        match job.kind {
            JobKind::Ordinary => self.display(&["install", job.name.as_str()]),
            JobKind::GuiApplication => self.display(&["install", "--cask", job.name.as_str()]),
        }
    }
}

/// Parse the JSON printed by `brew outdated --json`
fn parse_outdated(json: &str) -> Result<Vec<OutdatedPackage>> {
    let report: OutdatedReport = serde_json::from_str(json)?;

    let to_package = |entry: OutdatedEntry, suffix: &str| OutdatedPackage {
        name: format!("{}{suffix}", entry.name),
        current: entry.installed_versions.into_iter().next().unwrap_or_default(),
        latest: entry.current_version,
    };

    let formulae = report.formulae.into_iter().map(|f| to_package(f, ""));
    let casks = report.casks.into_iter().map(|c| to_package(c, " (cask)"));
    Ok(formulae.chain(casks).collect())
}
