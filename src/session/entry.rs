use thiserror::Error;

const SENTINEL: &str = "x";

/// One classified input line: either the exit token or a numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    Sentinel,
    Value(f64),
}

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("not a numeric entry: {0:?}")]
    NotNumeric(String),
}

/// Classifies a raw input line.
///
/// The sentinel match lowercases but does not strip whitespace, so `" x"` is
/// treated as a numeric candidate (and rejected). Numeric parsing trims
/// surrounding whitespace before delegating to [`str::parse`].
pub fn classify(line: &str) -> Result<Entry, EntryError> {
    if line.to_ascii_lowercase() == SENTINEL {
        return Ok(Entry::Sentinel);
    }
    line.trim()
        .parse::<f64>()
        .map(Entry::Value)
        .map_err(|_| EntryError::NotNumeric(line.to_string()))
}
