pub mod drivers;
pub mod repl;
