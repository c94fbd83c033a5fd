pub mod script_driver;

pub use script_driver::ScriptDriver;
