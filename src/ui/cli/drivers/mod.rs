pub mod inquire_driver;
mod prompt_driver;
mod reader_driver;

pub use inquire_driver::InquireDriver;
pub use prompt_driver::PromptDriver;
pub use reader_driver::ReaderDriver;
