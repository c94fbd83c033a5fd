use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{InquireError, Text};

/// Interactive driver backed by an [`inquire`] text prompt.
pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match Text::new(prompt).prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
