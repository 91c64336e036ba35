//! Package manager errors

use super::KickstartError;

/// Creates a package manager not installed error
pub fn not_installed(program: impl Into<String>) -> KickstartError {
    KickstartError::BrewNotInstalled {
        program: program.into(),
    }
}

/// Creates a package manager command failed error
pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> KickstartError {
    KickstartError::BrewCommandFailed {
        command: command.into(),
        reason: reason.into(),
    }
}
