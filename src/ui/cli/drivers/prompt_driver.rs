use anyhow::Result;

/// Source of raw input lines for the accumulator loop.
///
/// `Ok(None)` signals that the input stream is exhausted (end of file, or
/// the user cancelled an interactive prompt).
pub trait PromptDriver {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}
