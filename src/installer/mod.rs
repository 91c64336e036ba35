//! Concurrent installation orchestrator
//!
//! This module handles:
//! - Building install jobs from ordinary and GUI package lists
//! - Attempting a single job through an [`InstallBackend`] ([`adapter`])
//! - Classifying failure output into stable categories ([`classifier`])
//! - Fanning jobs out to a bounded worker pool ([`dispatcher`])
//! - Offering one retry of the failed jobs ([`retry`])
//!
//! [`pass::run_install_pass`] ties these together for the `install` command.

pub mod adapter;
pub mod classifier;
pub mod dispatcher;
pub mod pass;
pub mod retry;

use std::fmt;

pub use adapter::{AttemptOutput, InstallBackend, attempt};
pub use classifier::{ErrorCategory, classify};
pub use dispatcher::{Dispatcher, MAX_WORKERS};
pub use pass::{PassOptions, run_install_pass};
pub use retry::{RetryCoordinator, RetryReport};

use crate::error::{Result, package};

/// The form a package is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// Command-line formula
    Ordinary,
    /// GUI application (cask)
    GuiApplication,
}

/// One requested package installation
///
/// Identity is `(name, kind)`: the same name requested as both kinds yields
/// two distinct jobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstallJob {
    pub name: String,
    pub kind: JobKind,
}

impl InstallJob {
    pub fn new(name: impl Into<String>, kind: JobKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn ordinary(name: impl Into<String>) -> Self {
        Self::new(name, JobKind::Ordinary)
    }

    pub fn gui(name: impl Into<String>) -> Self {
        Self::new(name, JobKind::GuiApplication)
    }
}

impl fmt::Display for InstallJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            JobKind::Ordinary => write!(f, "{}", self.name),
            JobKind::GuiApplication => write!(f, "{} (cask)", self.name),
        }
    }
}

/// Terminal status of one attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// The install command succeeded
    Success,
    /// The install command failed only because the package is already present
    Benign,
    /// The install command failed for a reportable reason
    Failure(ErrorCategory),
}

impl OutcomeStatus {
    /// Whether the job counts as installed
    pub fn succeeded(&self) -> bool {
        !matches!(self, OutcomeStatus::Failure(_))
    }
}

/// Result of attempting one job exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub job: InstallJob,
    pub status: OutcomeStatus,
}

impl InstallOutcome {
    pub fn succeeded(&self) -> bool {
        self.status.succeeded()
    }

    /// Reduce the outcome to a failed job, if it is one
    pub fn into_failed(self) -> Option<FailedJob> {
        match self.status {
            OutcomeStatus::Failure(category) => Some(FailedJob {
                job: self.job,
                category,
            }),
            OutcomeStatus::Success | OutcomeStatus::Benign => None,
        }
    }
}

/// A job whose outcome was a failure, with the classified cause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedJob {
    pub job: InstallJob,
    pub category: ErrorCategory,
}

impl FailedJob {
    pub fn name(&self) -> &str {
        &self.job.name
    }
}

/// Build the unified job list: ordinary jobs first, then GUI jobs
///
/// Names are trimmed. Repeated `(name, kind)` pairs keep their first
/// occurrence. An empty name or a name containing whitespace cannot be turned
/// into a job and fails the whole list.
pub fn build_jobs<S: AsRef<str>>(ordinary: &[S], gui: &[S]) -> Result<Vec<InstallJob>> {
    let mut jobs: Vec<InstallJob> = Vec::with_capacity(ordinary.len() + gui.len());

    let tagged = ordinary
        .iter()
        .map(|n| (n.as_ref(), JobKind::Ordinary))
        .chain(gui.iter().map(|n| (n.as_ref(), JobKind::GuiApplication)));

    for (raw, kind) in tagged {
        let name = raw.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(package::invalid_name(raw));
        }
        let job = InstallJob::new(name, kind);
        if !jobs.contains(&job) {
            jobs.push(job);
        }
    }

    Ok(jobs)
}
