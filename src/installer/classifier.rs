//! Failure output classification
//!
//! Maps the combined output of a failed install command to a short, stable
//! category. Matching is a case-insensitive substring search over the whole
//! text, checked in a fixed order where the first match wins. "Already
//! installed" sits ahead of every real failure so it suppresses them.

use std::fmt;

/// Longest diagnostic line reported verbatim
const MAX_LINE_LEN: usize = 60;
const ELLIPSIS: &str = "...";

/// Stable label for the cause of a failed install
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    /// Already installed; not a reportable failure
    Benign,
    NoNetwork,
    ConnectionRefused,
    Timeout,
    PermissionDenied,
    DiskFull,
    DownloadCorrupted,
    DependencyError,
    /// First output line mentioning "error", possibly truncated
    DiagnosticLine(String),
    UnknownError,
}

impl ErrorCategory {
    pub fn is_benign(&self) -> bool {
        matches!(self, ErrorCategory::Benign)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ErrorCategory::UnknownError)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorCategory::NotFound => "package not found",
            ErrorCategory::Benign => "",
            ErrorCategory::NoNetwork => "no internet connection",
            ErrorCategory::ConnectionRefused => "connection refused",
            ErrorCategory::Timeout => "connection timed out",
            ErrorCategory::PermissionDenied => "permission denied",
            ErrorCategory::DiskFull => "disk full",
            ErrorCategory::DownloadCorrupted => "download corrupted",
            ErrorCategory::DependencyError => "dependency error",
            ErrorCategory::DiagnosticLine(line) => line,
            ErrorCategory::UnknownError => "unknown error",
        };
        f.write_str(label)
    }
}

/// Phrases checked in order against the lowercased output
const PHRASES: &[(&[&str], ErrorCategory)] = &[
    (&["no available formula"], ErrorCategory::NotFound),
    (&["already installed"], ErrorCategory::Benign),
    (&["no internet"], ErrorCategory::NoNetwork),
    (&["connection refused"], ErrorCategory::ConnectionRefused),
    (&["timed out"], ErrorCategory::Timeout),
    (&["permission denied"], ErrorCategory::PermissionDenied),
    (&["disk full", "no space"], ErrorCategory::DiskFull),
    (&["sha256 mismatch"], ErrorCategory::DownloadCorrupted),
    (&["depends on"], ErrorCategory::DependencyError),
];

/// Classify raw output from a failed install attempt
pub fn classify(output: &str) -> ErrorCategory {
    let lower = output.to_lowercase();

    for (needles, category) in PHRASES {
        if needles.iter().any(|needle| lower.contains(needle)) {
            return category.clone();
        }
    }

    output
        .lines()
        .find(|line| line.to_lowercase().contains("error"))
        .map_or(ErrorCategory::UnknownError, |line| {
            ErrorCategory::DiagnosticLine(truncate_line(line))
        })
}

fn truncate_line(line: &str) -> String {
    if line.chars().count() > MAX_LINE_LEN {
        let keep = MAX_LINE_LEN - ELLIPSIS.len();
        let mut truncated: String = line.chars().take(keep).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        line.to_string()
    }
}
