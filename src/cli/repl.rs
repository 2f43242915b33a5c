//! Running lines through an interpreter and printing the results.

use std::io::{BufRead, Write};

use crate::cli::args::OutputFormat;
use crate::error::DollaError;
use crate::output::format_command;
use crate::parser::{Command, Interpreter};
use crate::report::ErrorReporter;

/// Totals for a run over many lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines interpreted, blank lines excluded.
    pub lines: usize,
    /// Lines that produced an error.
    pub failures: usize,
    /// Whether the run stopped at `bye`.
    pub exited: bool,
}

/// Interpret one line and write its result to `out`.
///
/// In pretty mode errors print nothing, since the reporter already spoke.
/// In JSON mode every line gets an object so scripts see one per input.
///
/// # Errors
///
/// Returns an error if formatting or writing fails.
pub fn run_line<R: ErrorReporter, W: Write>(
    interpreter: &mut Interpreter<R>,
    line: &str,
    out: &mut W,
    format: OutputFormat,
) -> Result<Command, DollaError> {
    let command = interpreter.interpret(line);

    if !(command.is_error() && format == OutputFormat::Pretty) {
        let rendered = format_command(&command, interpreter.mode(), format)?;
        writeln!(out, "{}", rendered.trim_end())?;
    }

    Ok(command)
}

/// Interpret every line of `input` until EOF or `bye`.
///
/// Blank lines are skipped. A trailing `\r` is stripped from each line.
///
/// # Errors
///
/// Returns an error if reading input, formatting, or writing fails.
pub fn run_lines<R: ErrorReporter, I: BufRead, W: Write>(
    interpreter: &mut Interpreter<R>,
    input: I,
    out: &mut W,
    format: OutputFormat,
) -> Result<RunSummary, DollaError> {
    let mut summary = RunSummary::default();

    for line in input.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }

        summary.lines += 1;
        let command = run_line(interpreter, line, out, format)?;
        if command.is_error() {
            summary.failures += 1;
        }
        if command == Command::Exit {
            summary.exited = true;
            break;
        }
    }

    tracing::debug!(
        lines = summary.lines,
        failures = summary.failures,
        "finished reading input"
    );
    Ok(summary)
}
