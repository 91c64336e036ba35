//! Terminal presentation layer
//!
//! This module handles:
//! - Styled status lines (info, success, error, muted)
//! - Listing failed packages with their categories
//! - Yes/no confirmation through the [`Confirm`] trait
//!
//! The live progress line itself lives in [`crate::progress`].

pub mod prompt;

pub use prompt::{Confirm, DefaultAnswer, FixedAnswer, InquirePrompt};

use console::Style;

use crate::installer::FailedJob;

/// Bold header line
pub fn header(message: &str) {
    println!("{}", Style::new().bold().cyan().apply_to(message));
}

/// Informational line
pub fn info(message: &str) {
    println!("{} {message}", Style::new().blue().apply_to("==>"));
}

/// Success line
pub fn success(message: &str) {
    println!("{} {message}", Style::new().green().apply_to("✓"));
}

/// Error line, printed to stdout alongside the pass report
pub fn error(message: &str) {
    println!("{} {message}", Style::new().red().apply_to("✗"));
}

/// De-emphasized line
pub fn muted(message: &str) {
    println!("{}", Style::new().dim().apply_to(message));
}

/// One `    - name (category)` line per failed job
pub fn failed_list(failed: &[FailedJob]) {
    for line in failed_lines(failed) {
        println!("{line}");
    }
}

fn failed_lines(failed: &[FailedJob]) -> Vec<String> {
    failed
        .iter()
        .map(|f| {
            let category = f.category.to_string();
            if category.is_empty() {
                format!("    - {}", f.name())
            } else {
                format!("    - {} ({category})", f.name())
            }
        })
        .collect()
}

/// `"1 package"` / `"3 packages"`
pub fn packages(count: usize) -> String {
    if count == 1 {
        "1 package".to_string()
    } else {
        format!("{count} packages")
    }
}
