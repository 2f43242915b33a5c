//! Command recognition and validation.
//!
//! A line goes through three steps:
//! - [`RawInput::new`] splits it into tokens,
//! - [`dispatch`] picks a builder by verb and validates arguments,
//! - [`Interpreter`] updates the undo/redo [`Session`] for the result.
//!
//! ```
//! use dolla::parser::{Command, Interpreter};
//! use dolla::report::CollectingReporter;
//!
//! let mut interpreter = Interpreter::new(CollectingReporter::new());
//!
//! let command = interpreter.interpret("remove 3");
//! assert_eq!(command, Command::Remove { index: "3".to_string() });
//! assert_eq!(interpreter.session().last_removed_position(), Some(3));
//!
//! assert!(interpreter.interpret("launch rockets").is_error());
//! assert_eq!(interpreter.reporter().failures().len(), 1);
//! ```

mod command;
mod dispatch;
mod fields;
mod tokenizer;

pub use command::{Command, EntryArgs, EntryType, ParsedArguments, Verb};
pub use dispatch::{dispatch, DispatchContext};
pub use fields::{
    coerce_amount, extract_dated_fields, parse_amount, verify_entry_type, DATE_MARKER, TAG_MARKER,
};
pub use tokenizer::RawInput;

use crate::core::{Mode, Session, DEFAULT_DATE_FORMAT};
use crate::report::ErrorReporter;

/// Long-lived line interpreter.
///
/// Owns the reporter, the session and the current mode, so one value can be
/// fed every line a user types.
#[derive(Debug)]
pub struct Interpreter<R: ErrorReporter> {
    reporter: R,
    session: Session,
    mode: Mode,
    date_format: String,
}

impl<R: ErrorReporter> Interpreter<R> {
    /// Create an interpreter in the default mode with the default date format.
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            session: Session::new(),
            mode: Mode::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Start in `mode`.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Read entry dates with `format`.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Interpret one line.
    ///
    /// Failures are reported and come back as [`Command::Error`]. Successful
    /// commands update the session and mode:
    /// - `remove N` with a numeric `N` marks `N` removed and drops any redo,
    /// - `undo` with a pending undo clears it and makes a redo available,
    /// - `redo` with a pending redo clears it,
    /// - mode verbs switch the current mode.
    pub fn interpret(&mut self, line: &str) -> Command {
        let input = RawInput::new(line);
        let context = DispatchContext {
            mode: self.mode,
            date_format: &self.date_format,
        };
        let command = dispatch(&input, &context, &mut self.reporter);
        self.track(&command);
        command
    }

    fn track(&mut self, command: &Command) {
        match command {
            Command::Remove { index } => {
                if let Ok(position) = index.parse::<usize>() {
                    self.session.mark_removed(position);
                    self.session.clear_redo();
                }
            },
            Command::Undo if self.session.undo_pending() => {
                tracing::info!(
                    position = ?self.session.last_removed_position(),
                    "undoing removal"
                );
                self.session.clear_undo();
                self.session.mark_redo_available();
            },
            Command::Redo if self.session.redo_pending() => {
                self.session.clear_redo();
            },
            Command::SwitchMode { mode } => {
                tracing::debug!(from = %self.mode, to = %mode, "switching mode");
                self.mode = *mode;
            },
            _ => {},
        }
    }

    /// Current undo/redo state.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Current mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Date format used for entry dates.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// The reporter failures go to.
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Mutable access to the reporter, e.g. to drain collected failures.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CollectingReporter, FailureKind};

    fn interpreter() -> Interpreter<CollectingReporter> {
        Interpreter::new(CollectingReporter::new())
    }

    #[test]
    fn test_defaults() {
        let interpreter = interpreter();
        assert_eq!(interpreter.mode(), Mode::Dolla);
        assert_eq!(interpreter.date_format(), DEFAULT_DATE_FORMAT);
        assert_eq!(interpreter.session(), &Session::new());
    }

    #[test]
    fn test_remove_marks_undo() {
        let mut interpreter = interpreter();
        interpreter.interpret("remove 3");
        assert!(interpreter.session().undo_pending());
        assert_eq!(interpreter.session().last_removed_position(), Some(3));
    }

    #[test]
    fn test_remove_non_numeric_leaves_session() {
        let mut interpreter = interpreter();
        let command = interpreter.interpret("remove last");
        assert_eq!(command, Command::Remove { index: "last".to_string() });
        assert!(!interpreter.session().undo_pending());
    }

    #[test]
    fn test_undo_then_redo_cycle() {
        let mut interpreter = interpreter();
        interpreter.interpret("remove 2");

        interpreter.interpret("undo");
        assert!(!interpreter.session().undo_pending());
        assert_eq!(interpreter.session().last_removed_position(), None);
        assert!(interpreter.session().redo_pending());

        interpreter.interpret("redo");
        assert!(!interpreter.session().redo_pending());
    }

    #[test]
    fn test_undo_without_removal_changes_nothing() {
        let mut interpreter = interpreter();
        assert_eq!(interpreter.interpret("undo"), Command::Undo);
        assert!(!interpreter.session().redo_pending());
    }

    #[test]
    fn test_remove_drops_pending_redo() {
        let mut interpreter = interpreter();
        interpreter.interpret("remove 1");
        interpreter.interpret("undo");
        interpreter.interpret("remove 4");
        assert!(!interpreter.session().redo_pending());
        assert_eq!(interpreter.session().last_removed_position(), Some(4));
    }

    #[test]
    fn test_failed_remove_leaves_session() {
        let mut interpreter = interpreter();
        assert!(interpreter.interpret("remove").is_error());
        assert!(!interpreter.session().undo_pending());
    }

    #[test]
    fn test_mode_switch_feeds_sort_failure() {
        let mut interpreter = interpreter();
        interpreter.interpret("limits");
        assert_eq!(interpreter.mode(), Mode::Limit);

        interpreter.interpret("sort");
        assert_eq!(
            interpreter.reporter().failures(),
            [crate::report::ParseFailure::InvalidSort { mode: Mode::Limit }]
        );
    }

    #[test]
    fn test_with_mode_and_date_format() {
        let mut interpreter = interpreter()
            .with_mode(Mode::Entry)
            .with_date_format("%d.%m.%Y");
        assert_eq!(interpreter.mode(), Mode::Entry);

        let command = interpreter.interpret("add income 5 tip /on 01.02.2024");
        assert!(!command.is_error());
        assert!(interpreter.reporter().failures().is_empty());
    }

    #[test]
    fn test_reporter_mut_drains() {
        let mut interpreter = interpreter();
        interpreter.interpret("modify");
        let drained = interpreter.reporter_mut().take();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].kind(), FailureKind::InvalidModifyFormat);
        assert!(interpreter.reporter().failures().is_empty());
    }
}
