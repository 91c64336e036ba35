//! Bounded worker pool for install jobs
//!
//! All jobs are published to one shared queue before any worker starts, and
//! the queue is closed. Each worker pulls jobs until the queue is drained,
//! reporting progress around every attempt and sending the outcome back on a
//! result channel. The caller blocks until every worker has exited.

use std::num::NonZeroUsize;

use crossbeam_channel::{Receiver, Sender, unbounded};

use super::{FailedJob, InstallBackend, InstallJob, InstallOutcome, attempt};
use crate::progress::{ProgressSummary, ProgressTracker};

/// Upper bound on concurrent install commands
///
/// Package manager commands contend for the network and for the package
/// manager's own locks.
pub const MAX_WORKERS: usize = 4;

/// Where a pass paints its progress line
type TrackerFactory = Box<dyn Fn(NonZeroUsize) -> ProgressTracker + Send + Sync>;

/// Runs a list of jobs through a bounded pool of workers
pub struct Dispatcher<'a> {
    backend: &'a dyn InstallBackend,
    max_workers: usize,
    tracker: TrackerFactory,
}

impl<'a> Dispatcher<'a> {
    pub fn new(backend: &'a dyn InstallBackend) -> Self {
        Self {
            backend,
            max_workers: MAX_WORKERS,
            tracker: Box::new(ProgressTracker::new),
        }
    }

    /// Paint progress through `factory` instead of stdout
    #[cfg(test)]
    pub fn with_tracker(
        mut self,
        factory: impl Fn(NonZeroUsize) -> ProgressTracker + Send + Sync + 'static,
    ) -> Self {
        self.tracker = Box::new(factory);
        self
    }

    /// Number of workers a pass over `job_count` jobs would use
    pub fn worker_count(&self, job_count: usize) -> usize {
        self.max_workers.min(job_count)
    }

    /// Run every job once and return the failures in completion order
    pub fn run(&self, jobs: &[InstallJob]) -> Vec<FailedJob> {
        self.run_pass(jobs)
            .map(|(failed, _)| failed)
            .unwrap_or_default()
    }

    /// Like [`Dispatcher::run`], also returning the tracker's final figures
    ///
    /// Returns `None` for an empty job list; no tracker is created then.
    pub fn run_pass(&self, jobs: &[InstallJob]) -> Option<(Vec<FailedJob>, ProgressSummary)> {
        self.run_pass_with(jobs, |outcome, tracker| {
            let (completed, total) = tracker.snapshot();
            tracing::trace!(job = %outcome.job, completed, total, "job finished");
        })
    }

    /// Run a pass, calling `observe` on the collecting thread as each outcome
    /// arrives
    fn run_pass_with(
        &self,
        jobs: &[InstallJob],
        mut observe: impl FnMut(&InstallOutcome, &ProgressTracker),
    ) -> Option<(Vec<FailedJob>, ProgressSummary)> {
        let total = NonZeroUsize::new(jobs.len())?;
        let workers = self.worker_count(jobs.len());
        tracing::info!(jobs = jobs.len(), workers, "starting install pass");

        let (job_tx, job_rx) = unbounded::<InstallJob>();
        for job in jobs {
            // The receiver is alive until this function returns.
            let _ = job_tx.send(job.clone());
        }
        drop(job_tx);

        let tracker = (self.tracker)(total);
        let (result_tx, result_rx) = unbounded::<InstallOutcome>();
        // Workers log through the caller's subscriber.
        let dispatch = tracing::dispatcher::get_default(Clone::clone);

        let outcomes = std::thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                let tracker = &tracker;
                let dispatch = &dispatch;
                scope.spawn(move || {
                    tracing::dispatcher::with_default(dispatch, || {
                        self.work(&job_rx, &result_tx, tracker);
                    });
                });
            }
            // Workers hold the only remaining senders; the loop below ends
            // once all of them have exited.
            drop(result_tx);

            result_rx
                .iter()
                .inspect(|outcome| observe(outcome, &tracker))
                .collect::<Vec<_>>()
        });

        let summary = tracker.finish();

        // Per-job results wait until the progress line is done with the terminal.
        for outcome in &outcomes {
            tracing::debug!(
                job = %outcome.job,
                succeeded = outcome.succeeded(),
                status = ?outcome.status,
                "install attempt finished"
            );
        }
        let failed: Vec<FailedJob> = outcomes
            .into_iter()
            .filter_map(InstallOutcome::into_failed)
            .collect();

        tracing::debug!(
            completed = summary.completed,
            failed = failed.len(),
            peak_active = summary.peak_active,
            "install pass finished"
        );
        Some((failed, summary))
    }

    fn work(
        &self,
        jobs: &Receiver<InstallJob>,
        results: &Sender<InstallOutcome>,
        tracker: &ProgressTracker,
    ) {
        for job in jobs {
            tracing::trace!(job = %job, "installing");
            tracker.set_current(&job.name);
            let outcome = attempt(self.backend, &job);
            tracker.complete(&job.name);
            if results.send(outcome).is_err() {
                tracing::warn!(job = %job, "result collector gone, dropping outcome");
            }
        }
    }
}
