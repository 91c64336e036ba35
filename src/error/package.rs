//! Job list construction errors

use super::KickstartError;

/// Creates an invalid package name error
pub fn invalid_name(name: impl Into<String>) -> KickstartError {
    KickstartError::InvalidPackageName { name: name.into() }
}
