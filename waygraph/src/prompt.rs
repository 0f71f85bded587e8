//! Interactive scenario selection.

use std::io::{BufRead, Write};

use waygraph_core::{Scenario, ScenarioError};

use crate::config::DEFAULT_SCENARIO;

/// Ask for a scenario filename until one loads or the user gives up.
///
/// An empty answer selects [`DEFAULT_SCENARIO`]. When the file does not
/// exist the user is asked whether to try again; anything but `yes` (or end
/// of input) returns `Ok(None)`. Other load errors are returned as is.
pub fn prompt_scenario<R, W, L>(
    input: &mut R,
    output: &mut W,
    mut load: L,
) -> Result<Option<Scenario>, ScenarioError>
where
    R: BufRead,
    W: Write,
    L: FnMut(&str) -> Result<Scenario, ScenarioError>,
{
    loop {
        write!(output, "Enter filename: ")?;
        output.flush()?;
        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };
        let filename = if answer.is_empty() {
            DEFAULT_SCENARIO
        } else {
            answer.as_str()
        };

        match load(filename) {
            Ok(scenario) => return Ok(Some(scenario)),
            Err(e) if e.is_not_found() => {
                log::debug!("prompt: {filename} not found");
                writeln!(
                    output,
                    "\nFile: \"{filename}\" cannot be found in directory.\nPlease enter a valid filename.\n"
                )?;
                write!(output, "Would you like to try again (yes/no)? ")?;
                output.flush()?;
                match read_answer(input)? {
                    Some(again) if again.eq_ignore_ascii_case("yes") => {
                        writeln!(output, "\nTrying again...\n")?;
                    }
                    _ => return Ok(None),
                }
            }
            Err(e) => return Err(e),
        }
    }
}

/// Read one trimmed line, or `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>, ScenarioError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    const TINY: &str = "2 1\n1 0 0\n2 1 0\n1 2 1\n1 2\n";

    fn loader(name: &str) -> Result<Scenario, ScenarioError> {
        match name {
            "tiny.txt" | DEFAULT_SCENARIO => Scenario::parse(TINY),
            "broken.txt" => Scenario::parse("x"),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "no such file").into()),
        }
    }

    fn run(answers: &str) -> (Result<Option<Scenario>, ScenarioError>, String) {
        let mut input = answers.as_bytes();
        let mut output = Vec::new();
        let result = prompt_scenario(&mut input, &mut output, loader);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn loads_named_file() {
        let (result, out) = run("tiny.txt\n");
        assert_eq!(result.unwrap().unwrap().goal, 2);
        assert_eq!(out, "Enter filename: ");
    }

    #[test]
    fn empty_answer_uses_default() {
        let (result, _) = run("\n");
        assert!(result.unwrap().is_some());
    }

    #[test]
    fn retry_after_missing_file() {
        let (result, out) = run("nope.txt\n YES \ntiny.txt\n");
        assert!(result.unwrap().is_some());
        assert!(out.contains("File: \"nope.txt\" cannot be found in directory."));
        assert!(out.contains("Trying again..."));
        assert_eq!(out.matches("Enter filename: ").count(), 2);
    }

    #[test]
    fn declining_retry_gives_up() {
        let (result, out) = run("nope.txt\nno\ntiny.txt\n");
        assert!(result.unwrap().is_none());
        assert!(out.ends_with("Would you like to try again (yes/no)? "));
    }

    #[test]
    fn end_of_input_gives_up() {
        assert!(run("").0.unwrap().is_none());
        assert!(run("nope.txt\n").0.unwrap().is_none());
    }

    #[test]
    fn parse_errors_are_returned() {
        let (result, _) = run("broken.txt\n");
        assert!(matches!(result, Err(ScenarioError::InvalidField { line: 1, .. })));
    }
}
