//! Error types and handling for Kickstart
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`brew`]: Package manager errors
//! - [`config`]: Configuration errors
//! - [`package`]: Job list construction errors
//! - [`prompt`]: Interactive prompt errors
//!
//! Individual package install failures are not errors at this level. They are
//! classified into [`crate::installer::ErrorCategory`] and reported at the end
//! of a pass.

pub mod brew;
pub mod config;
pub mod package;
pub mod prompt;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Kickstart operations
#[derive(Error, Diagnostic, Debug)]
pub enum KickstartError {
    // Package manager errors
    #[error("Homebrew not found at '{program}'")]
    #[diagnostic(
        code(kickstart::brew::not_installed),
        help("Install Homebrew from https://brew.sh or point --brew at the brew binary")
    )]
    BrewNotInstalled { program: String },

    #[error("'{command}' failed: {reason}")]
    #[diagnostic(code(kickstart::brew::command_failed))]
    BrewCommandFailed { command: String, reason: String },

    #[error("Failed to parse outdated package list: {reason}")]
    #[diagnostic(code(kickstart::brew::outdated_parse_failed))]
    OutdatedParseFailed { reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(kickstart::config::not_found),
        help("Check the --config path or unset KICKSTART_CONFIG")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(kickstart::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(kickstart::config::parse_failed),
        help("Supported keys are 'brew', 'packages' and 'casks'")
    )]
    ConfigParseFailed { path: String, reason: String },

    // Job list errors
    #[error("Invalid package name: '{name}'")]
    #[diagnostic(
        code(kickstart::package::invalid_name),
        help("Package names must be non-empty and must not contain whitespace")
    )]
    InvalidPackageName { name: String },

    // Prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(kickstart::prompt::failed))]
    PromptFailed { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(kickstart::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for KickstartError {
    fn from(err: std::io::Error) -> Self {
        KickstartError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for KickstartError {
    fn from(err: serde_json::Error) -> Self {
        KickstartError::OutdatedParseFailed {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for KickstartError {
    fn from(err: inquire::InquireError) -> Self {
        prompt::failed(format!("Failed to read confirmation: {err}"))
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, KickstartError>;

#[cfg(test)]
mod tests;
