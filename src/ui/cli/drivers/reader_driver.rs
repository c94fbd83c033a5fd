use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Driver for non-interactive input (piped stdin, tests).
///
/// Prints the prompt to stdout itself and reads one line per call,
/// stripping only the trailing newline so that sentinel matching and
/// numeric parsing see the line as the user typed it.
pub struct ReaderDriver<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderDriver<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PromptDriver for ReaderDriver<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
