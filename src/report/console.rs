//! Human-readable failure rendering for the terminal.

use std::io::Write;

use colored::Colorize;

use super::{ErrorReporter, ParseFailure};

/// Render a failure as one line of plain text.
#[must_use]
pub fn render_failure(failure: &ParseFailure) -> String {
    match failure {
        ParseFailure::InvalidCommand { .. } => "Invalid command given!".to_string(),
        ParseFailure::InvalidEntryFormat => {
            "Please use the format 'add <income/expense> <amount> <description> /on <date> [/tag <tag>]'!"
                .to_string()
        },
        ParseFailure::InvalidEntryType { given } => {
            format!("'{given}' is not an entry type. Please use 'income' or 'expense'.")
        },
        ParseFailure::InvalidNumber { given } => format!("'{given}' is not a valid number."),
        ParseFailure::MissingDate => {
            "Please add '/on <date>' after your entry to specify the entry date.".to_string()
        },
        ParseFailure::InvalidDateFormat { given, expected } => {
            format!("'{given}' is not a date. Please use the format {expected}.")
        },
        ParseFailure::InvalidModifyFormat => "Please use the format 'modify <number>'!".to_string(),
        ParseFailure::InvalidSort { mode } => {
            format!("Please tell me how to sort the {mode} list, e.g. 'sort amount'.")
        },
        ParseFailure::UsageReminder { verb } => {
            format!("Please use the format '{} <number>'!", verb.as_str())
        },
    }
}

/// Reporter that writes each failure as a line to a terminal stream.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stderr> {
    /// Reporter writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorReporter for ConsoleReporter<W> {
    fn report(&mut self, failure: &ParseFailure) {
        // A closed stream is not the parser's problem.
        writeln!(self.out, "{} {}", "oops:".red().bold(), render_failure(failure)).ok();
    }
}
