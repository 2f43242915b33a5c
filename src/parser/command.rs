//! Verbs and the commands they produce.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::Mode;
use crate::report::FailureKind;

/// Every recognized leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// `add <income|expense> <amount> <description> /on <date> [/tag <tag>]`
    Add,
    /// `modify <number>`
    Modify,
    /// `sort <criterion>`
    Sort,
    /// `done <number>`
    Done,
    /// `remove <number>`
    Remove,
    /// `find <term>`
    Find,
    /// `list`
    List,
    /// `todo <description>`
    Todo,
    /// `event <description>`
    Event,
    /// `deadline <description>`
    Deadline,
    /// `undo`
    Undo,
    /// `redo`
    Redo,
    /// `bye`
    Bye,
    /// `dolla`, `entries`, `debts`, `limits`, `shortcuts`
    SwitchMode(Mode),
}

impl Verb {
    /// Look up a leading token. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let verb = match token {
            "add" => Self::Add,
            "modify" => Self::Modify,
            "sort" => Self::Sort,
            "done" => Self::Done,
            "remove" => Self::Remove,
            "find" => Self::Find,
            "list" => Self::List,
            "todo" => Self::Todo,
            "event" => Self::Event,
            "deadline" => Self::Deadline,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "bye" => Self::Bye,
            other => return Mode::from_switch_verb(other).map(Self::SwitchMode),
        };
        Some(verb)
    }
}

/// Direction of money for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    /// Exact, case-sensitive match on `income` or `expense`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The token this type is written as.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields carved out of a `<head> /on <date> /tag <tag>` line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedArguments {
    /// Free text between the amount and the date marker.
    pub description: String,
    /// Calendar date after ` /on `.
    pub date: NaiveDate,
    /// Text after ` /tag `, if any.
    pub tag: Option<String>,
}

/// A validated income or expense entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryArgs {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub amount: f64,
    #[serde(flatten)]
    pub fields: ParsedArguments,
}

/// The result of interpreting one line.
///
/// Index-addressed commands carry the position token exactly as typed;
/// checking that it names a real record is the executor's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddEntry(EntryArgs),
    Modify { position: i32 },
    Sort { criterion: String },
    Complete { index: String },
    Remove { index: String },
    Find { term: String },
    List,
    AddTodo { description: String },
    AddEvent { description: String },
    AddDeadline { description: String },
    Undo,
    Redo,
    SwitchMode { mode: Mode },
    Exit,
    Error { kind: FailureKind },
}

impl Command {
    /// Whether this is the error variant.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Short name of the variant, for logs and headings.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddEntry(_) => "add entry",
            Self::Modify { .. } => "modify",
            Self::Sort { .. } => "sort",
            Self::Complete { .. } => "complete",
            Self::Remove { .. } => "remove",
            Self::Find { .. } => "find",
            Self::List => "list",
            Self::AddTodo { .. } => "add todo",
            Self::AddEvent { .. } => "add event",
            Self::AddDeadline { .. } => "add deadline",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::SwitchMode { .. } => "switch mode",
            Self::Exit => "exit",
            Self::Error { .. } => "error",
        }
    }
}
