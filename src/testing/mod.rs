pub mod stubs;

pub use stubs::ScriptDriver;
