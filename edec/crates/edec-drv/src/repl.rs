//! Read-eval-print loop.
//!
//! Each line parses as its own program; the environment persists
//! across lines so bindings accumulate. Parse errors are reported
//! inline and do not end the session.

use std::io::{BufRead, Write};

use edec_eval::{Environment, Evaluator};
use edec_par::Parser;

const PROMPT: &str = ">> ";

/// Drives the REPL until the input stream ends.
pub fn start(input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
    let env = Environment::new();
    let mut evaluator = Evaluator::new();

    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let program = Parser::from_source(&line).parse();

        if !program.parse_errors.is_empty() {
            for diagnostic in &program.parse_errors {
                writeln!(output, "{diagnostic}")?;
            }
        } else {
            let result = evaluator.eval_program(&program, &env);
            writeln!(output, "Result: {}", result.inspect())?;
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
