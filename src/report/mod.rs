//! Failure reporting for the parse pipeline.
//!
//! The parser never renders text. It picks a [`ParseFailure`] and hands it to
//! an [`ErrorReporter`]; the reporter decides what the user sees.

mod console;

use serde::Serialize;

use crate::core::Mode;

pub use console::{render_failure, ConsoleReporter};

/// Verbs that address a record by position and share a usage reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexedVerb {
    /// `done <number>`
    Done,
    /// `remove <number>`
    Remove,
}

impl IndexedVerb {
    /// The verb as typed.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Remove => "remove",
        }
    }
}

/// A validation failure, with what a reporter needs to explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseFailure {
    /// Unrecognized verb, or a typed-add verb with nothing after it.
    InvalidCommand {
        /// The leading token as typed.
        verb: String,
    },
    /// Too few tokens for `add`, or no description before the date.
    InvalidEntryFormat,
    /// The token after `add` is neither `income` nor `expense`.
    InvalidEntryType {
        /// The offending token.
        given: String,
    },
    /// An amount that is not a finite number.
    InvalidNumber {
        /// The offending token.
        given: String,
    },
    /// The ` /on ` marker is absent.
    MissingDate,
    /// The date text does not parse under the expected format.
    InvalidDateFormat {
        /// The offending date text.
        given: String,
        /// The `strftime` format that was expected.
        expected: String,
    },
    /// The argument after `modify` is absent or not an integer.
    InvalidModifyFormat,
    /// `sort` was given nothing to sort by.
    InvalidSort {
        /// Mode the interpreter was in.
        mode: Mode,
    },
    /// `done` or `remove` without a position.
    UsageReminder {
        /// Which verb was missing its position.
        verb: IndexedVerb,
    },
}

impl ParseFailure {
    /// The parameter-free kind of this failure.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidCommand { .. } => FailureKind::InvalidCommand,
            Self::InvalidEntryFormat => FailureKind::InvalidEntryFormat,
            Self::InvalidEntryType { .. } => FailureKind::InvalidEntryType,
            Self::InvalidNumber { .. } => FailureKind::InvalidNumber,
            Self::MissingDate => FailureKind::MissingDate,
            Self::InvalidDateFormat { .. } => FailureKind::InvalidDateFormat,
            Self::InvalidModifyFormat => FailureKind::InvalidModifyFormat,
            Self::InvalidSort { .. } => FailureKind::InvalidSort,
            Self::UsageReminder { .. } => FailureKind::UsageReminder,
        }
    }
}

/// Failure kinds, without their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    InvalidCommand,
    InvalidEntryFormat,
    InvalidEntryType,
    InvalidNumber,
    MissingDate,
    InvalidDateFormat,
    InvalidModifyFormat,
    InvalidSort,
    UsageReminder,
}

/// Receiver of parse failures.
///
/// Reporting is fire-and-forget: the parser does not look at anything the
/// reporter does.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter {
    /// Deliver one failure.
    fn report(&mut self, failure: &ParseFailure);
}

/// Reporter that keeps every failure it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    failures: Vec<ParseFailure>,
}

impl CollectingReporter {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures received so far.
    #[must_use]
    pub fn failures(&self) -> &[ParseFailure] {
        &self.failures
    }

    /// Kinds of the failures received so far.
    #[must_use]
    pub fn kinds(&self) -> Vec<FailureKind> {
        self.failures.iter().map(ParseFailure::kind).collect()
    }

    /// Drain the collected failures.
    pub fn take(&mut self) -> Vec<ParseFailure> {
        std::mem::take(&mut self.failures)
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, failure: &ParseFailure) {
        self.failures.push(failure.clone());
    }
}
