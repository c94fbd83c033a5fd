use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;

/// Driver that replays a fixed list of input lines, then reports end of
/// input. Used to exercise the accumulator loop without a terminal.
pub struct ScriptDriver {
    lines: Vec<String>,
    idx: usize,
}

impl ScriptDriver {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            idx: 0,
        }
    }
}

impl PromptDriver for ScriptDriver {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let Some(line) = self.lines.get(self.idx) else {
            return Ok(None);
        };
        self.idx += 1;
        Ok(Some(line.clone()))
    }
}
