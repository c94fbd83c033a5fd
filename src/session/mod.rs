mod accumulator;
mod entry;

pub use accumulator::{AccumulatorSession, Step};
pub use entry::{Entry, EntryError, classify};
