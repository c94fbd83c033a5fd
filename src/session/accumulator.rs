use crate::estimators::{Estimator, IncrementalMean};
use crate::session::entry::{self, Entry};

#[derive(Debug, Clone, Copy, PartialEq)]
enum SessionState {
    Running,
    Stopped,
}

/// Outcome of feeding one input line to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The line parsed as a number and was folded into the mean.
    Updated { average: f64, count: u64 },
    /// The line was neither the sentinel nor a number; state is unchanged.
    Rejected,
    /// The sentinel was seen (or the session had already stopped).
    Finished,
}

/// The accumulator loop's state: a running mean plus a two-state machine
/// (`Running` → `Stopped` on sentinel, self-loop otherwise).
#[derive(Debug, Clone, Copy)]
pub struct AccumulatorSession {
    mean: IncrementalMean,
    state: SessionState,
}

impl Default for AccumulatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatorSession {
    pub fn new() -> Self {
        Self {
            mean: IncrementalMean::new(),
            state: SessionState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn average(&self) -> f64 {
        self.mean.estimation()
    }

    pub fn count(&self) -> u64 {
        self.mean.len()
    }

    /// Processes one raw input line.
    ///
    /// Rejected lines leave `average` and `count` untouched; once stopped,
    /// every further call returns [`Step::Finished`].
    pub fn step(&mut self, line: &str) -> Step {
        if self.state == SessionState::Stopped {
            return Step::Finished;
        }
        match entry::classify(line) {
            Ok(Entry::Sentinel) => {
                self.state = SessionState::Stopped;
                Step::Finished
            }
            Ok(Entry::Value(v)) => {
                self.mean.add(v);
                Step::Updated {
                    average: self.mean.estimation(),
                    count: self.mean.len(),
                }
            }
            Err(_) => Step::Rejected,
        }
    }
}
