//! One-shot retry of failed jobs
//!
//! After a pass, the failed jobs are listed and the caller is asked once
//! whether to retry them. An accepted retry runs exactly those jobs through
//! the same dispatcher one more time; whatever still fails is skipped for
//! good.

use super::{Dispatcher, FailedJob, InstallJob};
use crate::ui::{self, Confirm};

/// How a retry decision played out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryReport {
    /// The first pass had no failures
    NothingFailed,
    /// The retry was declined; these jobs are skipped
    Declined(Vec<FailedJob>),
    /// The retry ran; these jobs failed again and are skipped
    Retried { still_failed: Vec<FailedJob> },
}

impl RetryReport {
    /// Jobs that end the run uninstalled
    pub fn into_skipped(self) -> Vec<FailedJob> {
        match self {
            RetryReport::NothingFailed => Vec::new(),
            RetryReport::Declined(skipped)
            | RetryReport::Retried {
                still_failed: skipped,
            } => skipped,
        }
    }
}

/// Offers a single retry of a pass's failures
pub struct RetryCoordinator<'d, 'b> {
    dispatcher: &'d Dispatcher<'b>,
    confirm: &'d dyn Confirm,
}

impl<'d, 'b> RetryCoordinator<'d, 'b> {
    pub fn new(dispatcher: &'d Dispatcher<'b>, confirm: &'d dyn Confirm) -> Self {
        Self {
            dispatcher,
            confirm,
        }
    }

    pub fn coordinate(&self, failed: Vec<FailedJob>) -> RetryReport {
        if failed.is_empty() {
            return RetryReport::NothingFailed;
        }

        println!();
        ui::error(&format!(
            "{} failed to install:",
            ui::packages(failed.len())
        ));
        ui::failed_list(&failed);
        println!();

        let question = format!("Retry {} failed packages?", failed.len());
        let retry = self.confirm.confirm(&question, true).unwrap_or_else(|e| {
            tracing::warn!("{e}; not retrying");
            false
        });
        tracing::info!(retry, failed = failed.len(), "retry decision");

        if !retry {
            ui::muted("Skipping failed packages");
            return RetryReport::Declined(failed);
        }

        ui::info("Retrying failed packages...");
        let jobs: Vec<InstallJob> = failed.into_iter().map(|f| f.job).collect();
        let still_failed = self.dispatcher.run(&jobs);

        if still_failed.is_empty() {
            ui::success("All packages installed successfully on retry!");
        } else {
            println!();
            ui::muted(&format!(
                "Skipped {} that couldn't be installed:",
                ui::packages(still_failed.len())
            ));
            ui::failed_list(&still_failed);
        }

        RetryReport::Retried { still_failed }
    }
}
