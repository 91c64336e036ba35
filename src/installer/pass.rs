//! Install pass entry point
//!
//! Combines the dispatcher and the retry coordinator: one pass over all jobs,
//! then at most one retry pass over the failures. In preview mode the jobs are
//! only listed as the commands that would run.

use super::{Dispatcher, FailedJob, InstallBackend, InstallJob, RetryCoordinator, build_jobs};
use crate::error::Result;
use crate::ui::{self, Confirm};

/// Options for an install pass
#[derive(Debug, Clone, Default)]
pub struct PassOptions {
    /// List the commands instead of running them
    pub dry_run: bool,
}

/// Install `ordinary` and `gui` packages, returning the jobs that were skipped
///
/// Job failures never make this fail; only an unusable package list does.
pub fn run_install_pass<S: AsRef<str>>(
    ordinary: &[S],
    gui: &[S],
    options: &PassOptions,
    backend: &dyn InstallBackend,
    confirm: &dyn Confirm,
) -> Result<Vec<FailedJob>> {
    let jobs = build_jobs(ordinary, gui)?;
    Ok(run_jobs(&Dispatcher::new(backend), &jobs, options, backend, confirm))
}

fn run_jobs(
    dispatcher: &Dispatcher<'_>,
    jobs: &[InstallJob],
    options: &PassOptions,
    backend: &dyn InstallBackend,
    confirm: &dyn Confirm,
) -> Vec<FailedJob> {
    if jobs.is_empty() {
        return Vec::new();
    }

    if options.dry_run {
        ui::info("Would install packages:");
        for job in jobs {
            println!("    {}", backend.preview(job));
        }
        return Vec::new();
    }

    ui::info(&format!("Installing {}...", ui::packages(jobs.len())));
    let failed = dispatcher.run(jobs);
    RetryCoordinator::new(dispatcher, confirm)
        .coordinate(failed)
        .into_skipped()
}
