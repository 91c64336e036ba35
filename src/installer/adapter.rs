//! Single-job install attempts
//!
//! An ordinary job runs one install command. A GUI job walks a small state
//! machine: the GUI form first, then the ordinary form for the same name if
//! the GUI form fails. When both fail, the GUI form's output is classified
//! unless it yields nothing better than "unknown error", in which case the
//! fallback output is classified instead.

use super::{ErrorCategory, InstallJob, InstallOutcome, JobKind, OutcomeStatus, classify};

/// Result of running one install command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutput {
    pub success: bool,
    /// Combined stdout and stderr
    pub output: String,
}

impl AttemptOutput {
    pub fn success() -> Self {
        Self {
            success: true,
            output: String::new(),
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// The package manager operations the orchestrator drives
///
/// Implementations are called from several worker threads at once. Each call
/// must be independent of every other call.
pub trait InstallBackend: Send + Sync {
    /// Install `name` in its ordinary (command-line) form
    fn install_ordinary(&self, name: &str) -> AttemptOutput;

    /// Install `name` in its GUI application form
    fn install_gui(&self, name: &str) -> AttemptOutput;

    /// The command a job would run, for preview mode
    fn preview(&self, job: &InstallJob) -> String;
}

/// Attempt a job once and reduce the result to an outcome
pub fn attempt(backend: &dyn InstallBackend, job: &InstallJob) -> InstallOutcome {
    let status = match job.kind {
        JobKind::Ordinary => attempt_ordinary(backend, &job.name),
        JobKind::GuiApplication => attempt_gui(backend, &job.name),
    };

    InstallOutcome {
        job: job.clone(),
        status,
    }
}

fn attempt_ordinary(backend: &dyn InstallBackend, name: &str) -> OutcomeStatus {
    let result = backend.install_ordinary(name);
    if result.success {
        OutcomeStatus::Success
    } else {
        status_from(classify(&result.output))
    }
}

/// States of a GUI job attempt
enum GuiAttempt {
    GuiForm,
    FallbackOrdinaryForm { gui_output: String },
    Done(OutcomeStatus),
}

impl GuiAttempt {
    fn step(self, backend: &dyn InstallBackend, name: &str) -> Self {
        match self {
            GuiAttempt::GuiForm => {
                let result = backend.install_gui(name);
                if result.success {
                    GuiAttempt::Done(OutcomeStatus::Success)
                } else {
                    tracing::trace!(package = name, "GUI form failed, trying ordinary form");
                    GuiAttempt::FallbackOrdinaryForm {
                        gui_output: result.output,
                    }
                }
            }
            GuiAttempt::FallbackOrdinaryForm { gui_output } => {
                let result = backend.install_ordinary(name);
                if result.success {
                    return GuiAttempt::Done(OutcomeStatus::Success);
                }
                let category = match classify(&gui_output) {
                    category if category.is_unknown() => classify(&result.output),
                    category => category,
                };
                GuiAttempt::Done(status_from(category))
            }
            done @ GuiAttempt::Done(_) => done,
        }
    }
}

fn attempt_gui(backend: &dyn InstallBackend, name: &str) -> OutcomeStatus {
    let mut state = GuiAttempt::GuiForm;
    loop {
        match state.step(backend, name) {
            GuiAttempt::Done(status) => return status,
            next => state = next,
        }
    }
}

fn status_from(category: ErrorCategory) -> OutcomeStatus {
    if category.is_benign() {
        OutcomeStatus::Benign
    } else {
        OutcomeStatus::Failure(category)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scripted backend keyed by `(name, gui_form)`; unscripted calls succeed
    #[derive(Default)]
    pub(crate) struct ScriptedBackend {
        script: HashMap<(String, bool), AttemptOutput>,
        pub(crate) calls: Mutex<Vec<(String, bool)>>,
    }

    impl ScriptedBackend {
        pub(crate) fn fail_ordinary(mut self, name: &str, output: &str) -> Self {
            self.script
                .insert((name.to_string(), false), AttemptOutput::failure(output));
            self
        }

        pub(crate) fn fail_gui(mut self, name: &str, output: &str) -> Self {
            self.script
                .insert((name.to_string(), true), AttemptOutput::failure(output));
            self
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn run(&self, name: &str, gui: bool) -> AttemptOutput {
            self.calls.lock().unwrap().push((name.to_string(), gui));
            self.script
                .get(&(name.to_string(), gui))
                .cloned()
                .unwrap_or_else(AttemptOutput::success)
        }
    }

    impl InstallBackend for ScriptedBackend {
        fn install_ordinary(&self, name: &str) -> AttemptOutput {
            self.run(name, false)
        }

        fn install_gui(&self, name: &str) -> AttemptOutput {
            self.run(name, true)
        }

        fn preview(&self, job: &InstallJob) -> String {
            format!("fake install {job}")
        }
    }

    #[test]
    fn test_ordinary_success() {
        let backend = ScriptedBackend::default();
        let outcome = attempt(&backend, &InstallJob::ordinary("git"));
        assert_eq!(outcome.status, OutcomeStatus::Success);
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_ordinary_failure_is_classified() {
        let backend =
            ScriptedBackend::default().fail_ordinary("b", "Error: No internet connection available");
        let outcome = attempt(&backend, &InstallJob::ordinary("b"));
        assert_eq!(
            outcome.status,
            OutcomeStatus::Failure(ErrorCategory::NoNetwork)
        );
    }

    #[test]
    fn test_ordinary_already_installed_is_benign() {
        let backend = ScriptedBackend::default()
            .fail_ordinary("git", "Warning: git 2.44 is already installed and up-to-date");
        let outcome = attempt(&backend, &InstallJob::ordinary("git"));
        assert_eq!(outcome.status, OutcomeStatus::Benign);
        assert!(outcome.succeeded());
    }

    #[test]
    fn test_gui_success_skips_fallback() {
        let backend = ScriptedBackend::default();
        let outcome = attempt(&backend, &InstallJob::gui("firefox"));
        assert_eq!(outcome.status, OutcomeStatus::Success);
        assert_eq!(
            *backend.calls.lock().unwrap(),
            vec![("firefox".to_string(), true)]
        );
    }

    #[test]
    fn test_gui_fallback_success() {
        let backend = ScriptedBackend::default().fail_gui("htop", "Error: Cask 'htop' is unavailable");
        let outcome = attempt(&backend, &InstallJob::gui("htop"));
        assert_eq!(outcome.status, OutcomeStatus::Success);
        assert_eq!(
            *backend.calls.lock().unwrap(),
            vec![("htop".to_string(), true), ("htop".to_string(), false)]
        );
    }

    #[test]
    fn test_gui_both_fail_prefers_first_diagnostic() {
        let backend = ScriptedBackend::default()
            .fail_gui("x", "Error: something")
            .fail_ordinary("x", "Error: No available formula with the name \"x\"");
        let outcome = attempt(&backend, &InstallJob::gui("x"));
        assert_eq!(
            outcome.status,
            OutcomeStatus::Failure(ErrorCategory::DiagnosticLine(
                "Error: something".to_string()
            ))
        );
    }

    #[test]
    fn test_gui_both_fail_unknown_first_uses_second() {
        let backend = ScriptedBackend::default()
            .fail_gui("x", "nothing useful here")
            .fail_ordinary("x", "Error: No available formula with the name \"x\"");
        let outcome = attempt(&backend, &InstallJob::gui("x"));
        assert_eq!(
            outcome.status,
            OutcomeStatus::Failure(ErrorCategory::NotFound)
        );
    }

    #[test]
    fn test_gui_both_fail_both_unknown() {
        let backend = ScriptedBackend::default()
            .fail_gui("x", "")
            .fail_ordinary("x", "");
        let outcome = attempt(&backend, &InstallJob::gui("x"));
        assert_eq!(
            outcome.status,
            OutcomeStatus::Failure(ErrorCategory::UnknownError)
        );
    }

    #[test]
    fn test_gui_already_installed_folds_into_success() {
        let backend = ScriptedBackend::default()
            .fail_gui("slack", "Warning: Cask 'slack' is already installed.")
            .fail_ordinary("slack", "Error: No available formula with the name \"slack\"");
        let outcome = attempt(&backend, &InstallJob::gui("slack"));
        assert_eq!(outcome.status, OutcomeStatus::Benign);
        assert!(outcome.into_failed().is_none());
    }
}
