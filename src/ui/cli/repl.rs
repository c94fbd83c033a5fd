use anyhow::Result;
use log::debug;
use std::io::Write;

use crate::session::{AccumulatorSession, Step};
use crate::ui::cli::drivers::PromptDriver;

const BANNER: &str = "Enter floating-point numbers (or 'x' to end program):";
const PROMPT: &str = "-> ";
const INVALID: &str = "Invalid input. Please enter a number or 'x' to quit.";
const GOODBYE: &str = "End of Program.";

/// Runs the accumulator loop until the sentinel is seen or input runs out.
pub fn run<D: PromptDriver, W: Write>(driver: &mut D, out: &mut W) -> Result<()> {
    let mut session = AccumulatorSession::new();

    writeln!(out, "{BANNER}")?;
    while session.is_running() {
        let Some(line) = driver.read_line(PROMPT)? else {
            // Input exhausted without a sentinel: stop quietly.
            break;
        };

        match session.step(&line) {
            Step::Updated { average, count } => {
                debug!("accepted {line:?}: count={count} average={average}");
                writeln!(out, "Current average after {count} numbers: {average:.2}")?;
            }
            Step::Rejected => {
                debug!("rejected {line:?}");
                writeln!(out, "{INVALID}")?;
            }
            Step::Finished => {
                writeln!(out, "{GOODBYE}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptDriver;

    fn run_script(lines: &[&str]) -> Vec<String> {
        let mut driver = ScriptDriver::new(lines.iter().copied());
        let mut out = Vec::new();
        run(&mut driver, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn averages_each_entry_then_says_goodbye() {
        let output = run_script(&["10", "20", "x"]);
        assert_eq!(
            output,
            vec![
                BANNER.to_string(),
                "Current average after 1 numbers: 10.00".to_string(),
                "Current average after 2 numbers: 15.00".to_string(),
                GOODBYE.to_string(),
            ]
        );
    }

    #[test]
    fn recovers_from_malformed_input() {
        let output = run_script(&["abc", "5", "x"]);
        assert_eq!(
            output,
            vec![
                BANNER.to_string(),
                INVALID.to_string(),
                "Current average after 1 numbers: 5.00".to_string(),
                GOODBYE.to_string(),
            ]
        );
    }

    #[test]
    fn uppercase_sentinel_terminates_immediately() {
        let output = run_script(&["X"]);
        assert_eq!(output, vec![BANNER.to_string(), GOODBYE.to_string()]);
    }

    #[test]
    fn exhausted_input_stops_without_goodbye() {
        let output = run_script(&["1", "2"]);
        assert_eq!(
            output,
            vec![
                BANNER.to_string(),
                "Current average after 1 numbers: 1.00".to_string(),
                "Current average after 2 numbers: 1.50".to_string(),
            ]
        );
    }

    #[test]
    fn repeated_invalid_input_never_moves_the_average() {
        let output = run_script(&["4", "oops", "oops", "oops", "x"]);
        assert_eq!(
            output,
            vec![
                BANNER.to_string(),
                "Current average after 1 numbers: 4.00".to_string(),
                INVALID.to_string(),
                INVALID.to_string(),
                INVALID.to_string(),
                GOODBYE.to_string(),
            ]
        );
    }
}
