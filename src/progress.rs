//! Live progress line for an install pass
//!
//! A [`ProgressTracker`] owns its render state behind a single mutex. Every
//! mutation repaints the line while holding that lock, so concurrent workers
//! never interleave their output. A background ticker animates the spinner
//! while at least one job is active and stops when the tracker is finished.

use std::io::Write;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use console::{Style, Term};
use crossbeam_channel::{Sender, bounded, select, tick};

const BAR_WIDTH: usize = 40;
const TICK_INTERVAL: Duration = Duration::from_millis(80);
const MAX_NAME_LEN: usize = 15;
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Final figures reported by [`ProgressTracker::finish`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub elapsed: Duration,
    /// Largest number of jobs that were active at the same time
    pub peak_active: usize,
}

struct ProgressState {
    total: usize,
    completed: usize,
    /// Active job names in start order; a name may appear more than once
    active: Vec<String>,
    peak_active: usize,
    started: Instant,
    spinner_idx: usize,
    out: Box<dyn Write + Send>,
}

/// Progress display for one dispatch pass
pub struct ProgressTracker {
    state: Arc<Mutex<ProgressState>>,
    stop: Sender<()>,
    ticker: JoinHandle<()>,
}

impl ProgressTracker {
    /// Create a tracker that paints to stdout
    pub fn new(total: NonZeroUsize) -> Self {
        Self::with_output(total, Term::stdout())
    }

    /// Create a tracker that paints to `out`
    pub fn with_output(total: NonZeroUsize, out: impl Write + Send + 'static) -> Self {
        let state = Arc::new(Mutex::new(ProgressState {
            total: total.get(),
            completed: 0,
            active: Vec::new(),
            peak_active: 0,
            started: Instant::now(),
            spinner_idx: 0,
            out: Box::new(out),
        }));

        let (stop, stopped) = bounded::<()>(0);
        let ticker_state = Arc::clone(&state);
        let ticker = std::thread::spawn(move || {
            let ticks = tick(TICK_INTERVAL);
            loop {
                select! {
                    recv(stopped) -> _ => break,
                    recv(ticks) -> _ => {
                        let mut state = lock(&ticker_state);
                        state.spinner_idx = (state.spinner_idx + 1) % SPINNER_FRAMES.len();
                        if !state.active.is_empty() {
                            state.render();
                        }
                    }
                }
            }
        });

        Self {
            state,
            stop,
            ticker,
        }
    }

    /// Mark a job as started
    pub fn set_current(&self, name: &str) {
        let mut state = lock(&self.state);
        state.active.push(name.to_string());
        state.peak_active = state.peak_active.max(state.active.len());
        state.render();
    }

    /// Mark a job as finished, whatever its outcome
    pub fn complete(&self, name: &str) {
        let mut state = lock(&self.state);
        if let Some(pos) = state.active.iter().position(|n| n == name) {
            state.active.remove(pos);
        }
        if state.completed < state.total {
            state.completed += 1;
        }
        state.render();
    }

    /// Current `(completed, total)`
    pub fn snapshot(&self) -> (usize, usize) {
        let state = lock(&self.state);
        (state.completed, state.total)
    }

    /// Whether a job named `name` is currently marked active
    #[cfg(test)]
    pub(crate) fn is_active(&self, name: &str) -> bool {
        lock(&self.state).active.iter().any(|n| n == name)
    }

    /// Stop the spinner and print the elapsed time line
    ///
    /// Consumes the tracker, so a pass can finish it only once.
    pub fn finish(self) -> ProgressSummary {
        let Self {
            state,
            stop,
            ticker,
        } = self;

        // Disconnecting the channel is the stop signal.
        drop(stop);
        if ticker.join().is_err() {
            tracing::warn!("progress ticker thread panicked");
        }

        let mut state = lock(&state);
        let elapsed = state.started.elapsed();
        let _ = writeln!(state.out, "\n  Completed in {}", format_duration(elapsed));
        let _ = state.out.flush();

        ProgressSummary {
            completed: state.completed,
            total: state.total,
            elapsed,
            peak_active: state.peak_active,
        }
    }
}

impl ProgressState {
    fn render(&mut self) {
        let line = self.line(self.started.elapsed());
        let _ = write!(self.out, "\r\x1b[K{line}");
        let _ = self.out.flush();
    }

    fn line(&self, elapsed: Duration) -> String {
        #[allow(clippy::cast_precision_loss)]
        let percent = self.completed as f64 / self.total as f64;
        let filled = self.completed * BAR_WIDTH / self.total;

        let bar = format!(
            "{}{}",
            Style::new().green().apply_to("█".repeat(filled)),
            Style::new().black().bright().apply_to("░".repeat(BAR_WIDTH - filled)),
        );
        let status = format!(" {}/{} ({:.0}%)", self.completed, self.total, percent * 100.0);
        let eta = estimate_remaining(elapsed, self.completed, self.total).unwrap_or_default();

        let current = Style::new().blue();
        let (spinner, active) = match self.active.first() {
            Some(first) => (
                format!("{} ", current.apply_to(SPINNER_FRAMES[self.spinner_idx])),
                active_display(first, self.active.len()),
            ),
            None => (String::new(), String::new()),
        };

        format!(
            "{bar}{} {} {spinner}{}",
            Style::new().dim().apply_to(status),
            Style::new().dim().apply_to(eta),
            current.apply_to(active),
        )
    }
}

fn lock(state: &Mutex<ProgressState>) -> MutexGuard<'_, ProgressState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn active_display(first: &str, count: usize) -> String {
    let name = if first.chars().count() > MAX_NAME_LEN {
        let head: String = first.chars().take(MAX_NAME_LEN - 3).collect();
        format!("{head}...")
    } else {
        first.to_string()
    };

    if count > 1 {
        format!("{name} +{} more", count - 1)
    } else {
        name
    }
}

/// Estimated time left, or `None` before the first job completes
fn estimate_remaining(elapsed: Duration, completed: usize, total: usize) -> Option<String> {
    let done = u32::try_from(completed).ok().filter(|n| *n > 0)?;
    let remaining = u32::try_from(total.saturating_sub(completed)).unwrap_or(u32::MAX);
    let eta = (elapsed / done) * remaining;

    let text = if eta < Duration::from_secs(1) {
        "< 1s".to_string()
    } else if eta < Duration::from_secs(60) {
        format!("~{}s", eta.as_secs())
    } else {
        let mins = eta.as_secs() / 60;
        let secs = eta.as_secs() % 60;
        if secs > 0 {
            format!("~{mins}m{secs}s")
        } else {
            format!("~{mins}m")
        }
    };
    Some(text)
}

fn format_duration(d: Duration) -> String {
    if d < Duration::from_secs(60) {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m{}s", d.as_secs() / 60, d.as_secs() % 60)
    }
}
