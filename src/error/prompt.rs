//! Interactive prompt errors

use super::KickstartError;

/// Creates a prompt failed error
pub fn failed(message: impl Into<String>) -> KickstartError {
    KickstartError::PromptFailed {
        message: message.into(),
    }
}
