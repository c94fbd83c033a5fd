use std::io::{self, IsTerminal};

use anyhow::Result;
use runmean::ui::cli::drivers::{InquireDriver, ReaderDriver};
use runmean::ui::cli::repl;

fn main() -> Result<()> {
    env_logger::init();

    let mut out = io::stdout();
    if io::stdin().is_terminal() {
        repl::run(&mut InquireDriver, &mut out)
    } else {
        let stdin = io::stdin();
        let mut driver = ReaderDriver::new(stdin.lock());
        repl::run(&mut driver, &mut out)
    }
}
