//! Yes/no confirmation
//!
//! The retry step asks through [`Confirm`] so that the interactive prompt
//! can be swapped for a fixed answer in scripts and tests.

use inquire::Confirm as InquireConfirm;

use crate::error::Result;

/// Ask a yes/no question
pub trait Confirm {
    fn confirm(&self, message: &str, default_yes: bool) -> Result<bool>;
}

/// Interactive prompt on the terminal
pub struct InquirePrompt;

impl Confirm for InquirePrompt {
    fn confirm(&self, message: &str, default_yes: bool) -> Result<bool> {
        let answer = InquireConfirm::new(message)
            .with_default(default_yes)
            .with_help_message("Press Enter to accept the default")
            .prompt()?;
        Ok(answer)
    }
}

/// Answers every question with its default, without asking
pub struct DefaultAnswer;

impl Confirm for DefaultAnswer {
    fn confirm(&self, message: &str, default_yes: bool) -> Result<bool> {
        tracing::debug!(message, default_yes, "answering prompt with default");
        Ok(default_yes)
    }
}

/// Answers every question the same way
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, message: &str, _default_yes: bool) -> Result<bool> {
        tracing::debug!(message, answer = self.0, "answering prompt");
        Ok(self.0)
    }
}
