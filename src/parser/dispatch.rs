//! Verb dispatch: from tokens to a [`Command`].

use crate::core::Mode;
use crate::report::{ErrorReporter, FailureKind, IndexedVerb, ParseFailure};

use super::command::{Command, EntryArgs, Verb};
use super::fields::{extract_dated_fields, parse_amount, verify_entry_type};
use super::tokenizer::RawInput;

/// Settings that shape how a line is read.
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    /// Mode the interpreter is in; named in sort failures.
    pub mode: Mode,
    /// `strftime` format for entry dates.
    pub date_format: &'a str,
}

/// Why a builder gave up.
#[derive(Debug)]
enum Rejection {
    /// Not yet told to the reporter.
    Unreported(ParseFailure),
    /// Already reported by the builder.
    Reported(FailureKind),
}

impl From<ParseFailure> for Rejection {
    fn from(failure: ParseFailure) -> Self {
        Self::Unreported(failure)
    }
}

/// Build the command for one tokenized line.
///
/// Never panics. Every failure is reported exactly once through `reporter`
/// and turned into [`Command::Error`].
pub fn dispatch(
    input: &RawInput,
    context: &DispatchContext<'_>,
    reporter: &mut dyn ErrorReporter,
) -> Command {
    let result = match Verb::from_token(input.verb()) {
        Some(verb) => {
            tracing::debug!(?verb, "dispatching");
            build(verb, input, context, reporter)
        },
        None => Err(Rejection::Unreported(ParseFailure::InvalidCommand {
            verb: input.verb().to_string(),
        })),
    };

    result.unwrap_or_else(|rejection| {
        let kind = match rejection {
            Rejection::Unreported(failure) => {
                reporter.report(&failure);
                failure.kind()
            },
            Rejection::Reported(kind) => kind,
        };
        tracing::debug!(?kind, "rejected input");
        Command::Error { kind }
    })
}

fn build(
    verb: Verb,
    input: &RawInput,
    context: &DispatchContext<'_>,
    reporter: &mut dyn ErrorReporter,
) -> Result<Command, Rejection> {
    match verb {
        Verb::Add => build_entry(input, context, reporter),
        Verb::Modify => build_modify(input),
        Verb::Sort => build_sort(input, context.mode),
        Verb::Done => indexed_arg(input, IndexedVerb::Done).map(|index| Command::Complete { index }),
        Verb::Remove => {
            indexed_arg(input, IndexedVerb::Remove).map(|index| Command::Remove { index })
        },
        Verb::Find => Ok(Command::Find {
            term: input.rest_after_verb().unwrap_or_default().to_string(),
        }),
        Verb::List => Ok(Command::List),
        Verb::Todo => typed_description(input).map(|description| Command::AddTodo { description }),
        Verb::Event => typed_description(input).map(|description| Command::AddEvent { description }),
        Verb::Deadline => {
            typed_description(input).map(|description| Command::AddDeadline { description })
        },
        Verb::Undo => Ok(Command::Undo),
        Verb::Redo => Ok(Command::Redo),
        Verb::Bye => Ok(Command::Exit),
        Verb::SwitchMode(mode) => Ok(Command::SwitchMode { mode }),
    }
}

/// `add <income|expense> <amount> <description> /on <date> [/tag <tag>]`
///
/// A bad amount is reported but the date is still checked, so the user
/// hears about both. No entry is built from a bad amount.
fn build_entry(
    input: &RawInput,
    context: &DispatchContext<'_>,
    reporter: &mut dyn ErrorReporter,
) -> Result<Command, Rejection> {
    let type_token = input.arg(1).ok_or(ParseFailure::InvalidEntryFormat)?;
    let entry_type = verify_entry_type(type_token, reporter)
        .ok_or(Rejection::Reported(FailureKind::InvalidEntryType))?;

    let amount_token = input.arg(2).ok_or(ParseFailure::InvalidEntryFormat)?;
    let amount = parse_amount(amount_token);
    if let Err(failure) = &amount {
        reporter.report(failure);
    }

    let fields = extract_dated_fields(input, context.date_format)?;
    let amount = amount.map_err(|failure| Rejection::Reported(failure.kind()))?;

    Ok(Command::AddEntry(EntryArgs {
        entry_type,
        amount,
        fields,
    }))
}

/// `modify <number>`
fn build_modify(input: &RawInput) -> Result<Command, Rejection> {
    let position = input
        .arg(1)
        .and_then(|token| token.parse::<i32>().ok())
        .ok_or(ParseFailure::InvalidModifyFormat)?;

    Ok(Command::Modify { position })
}

/// `sort <criterion>`
fn build_sort(input: &RawInput, mode: Mode) -> Result<Command, Rejection> {
    let criterion = input
        .arg(1)
        .filter(|token| !token.is_empty())
        .ok_or(ParseFailure::InvalidSort { mode })?;

    Ok(Command::Sort {
        criterion: criterion.to_string(),
    })
}

/// The position token of `done`/`remove`, uninterpreted.
fn indexed_arg(input: &RawInput, verb: IndexedVerb) -> Result<String, Rejection> {
    input
        .arg(1)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(Rejection::Unreported(ParseFailure::UsageReminder { verb }))
}

/// Everything after `todo `, `event ` or `deadline `.
fn typed_description(input: &RawInput) -> Result<String, Rejection> {
    input.rest_after_verb().map(str::to_string).ok_or_else(|| {
        Rejection::Unreported(ParseFailure::InvalidCommand {
            verb: input.verb().to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::DEFAULT_DATE_FORMAT;
    use crate::parser::command::{EntryType, ParsedArguments};
    use crate::report::{CollectingReporter, MockErrorReporter};

    const CONTEXT: DispatchContext<'static> = DispatchContext {
        mode: Mode::Entry,
        date_format: DEFAULT_DATE_FORMAT,
    };

    fn run(line: &str) -> (Command, CollectingReporter) {
        let mut reporter = CollectingReporter::new();
        let command = dispatch(&RawInput::new(line), &CONTEXT, &mut reporter);
        (command, reporter)
    }

    fn assert_clean(line: &str) -> Command {
        let (command, reporter) = run(line);
        assert!(
            reporter.failures().is_empty(),
            "{line:?} reported {:?}",
            reporter.failures()
        );
        assert!(!command.is_error(), "{line:?} gave {command:?}");
        command
    }

    // ===================
    // Recognition Tests
    // ===================

    #[test]
    fn test_every_verb_accepts_a_well_formed_line() {
        let cases = [
            ("add income 50 lunch /on 2024-01-01", "add entry"),
            ("modify 4", "modify"),
            ("sort amount", "sort"),
            ("done 2", "complete"),
            ("remove 1", "remove"),
            ("find coffee", "find"),
            ("list", "list"),
            ("todo read book", "add todo"),
            ("event party /at sat", "add event"),
            ("deadline essay /by mon", "add deadline"),
            ("undo", "undo"),
            ("redo", "redo"),
            ("bye", "exit"),
            ("entries", "switch mode"),
        ];

        for (line, name) in cases {
            assert_eq!(assert_clean(line).name(), name, "{line:?}");
        }
    }

    #[test]
    fn test_unrecognized_verb_reports_invalid_command_once() {
        for line in ["blah", "blah blah", "ADD income 5 x /on 2024-01-01", "", " list"] {
            let mut reporter = MockErrorReporter::new();
            reporter
                .expect_report()
                .withf(|failure| failure.kind() == FailureKind::InvalidCommand)
                .times(1)
                .return_const(());

            let command = dispatch(&RawInput::new(line), &CONTEXT, &mut reporter);
            assert_eq!(command, Command::Error { kind: FailureKind::InvalidCommand }, "{line:?}");
        }
    }

    // ===============
    // Entry Tests
    // ===============

    #[test]
    fn test_add_entry_payload() {
        let command = assert_clean("add expense 12.5 lunch /on 2024-01-01 /tag food");
        assert_eq!(
            command,
            Command::AddEntry(EntryArgs {
                entry_type: EntryType::Expense,
                amount: 12.5,
                fields: ParsedArguments {
                    description: "lunch".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    tag: Some("food".to_string()),
                },
            })
        );
    }

    #[test]
    fn test_add_without_type_is_format_error() {
        let (command, reporter) = run("add");
        assert_eq!(command, Command::Error { kind: FailureKind::InvalidEntryFormat });
        assert_eq!(reporter.failures(), [ParseFailure::InvalidEntryFormat]);
    }

    #[test]
    fn test_add_without_amount_is_format_error() {
        let (command, reporter) = run("add income");
        assert_eq!(command, Command::Error { kind: FailureKind::InvalidEntryFormat });
        assert_eq!(reporter.kinds(), vec![FailureKind::InvalidEntryFormat]);
    }

    #[test]
    fn test_add_bad_type_aborts_before_other_checks() {
        let (command, reporter) = run("add cash abc lunch");
        assert_eq!(command, Command::Error { kind: FailureKind::InvalidEntryType });
        assert_eq!(
            reporter.failures(),
            [ParseFailure::InvalidEntryType { given: "cash".to_string() }]
        );
    }

    #[test]
    fn test_add_bad_type_without_amount_reports_type() {
        let (_, reporter) = run("add cash");
        assert_eq!(reporter.kinds(), vec![FailureKind::InvalidEntryType]);
    }

    #[test]
    fn test_add_bad_amount_still_checks_date() {
        let (command, reporter) = run("add income abc lunch /on not-a-date");
        assert_eq!(command, Command::Error { kind: FailureKind::InvalidDateFormat });
        assert_eq!(
            reporter.kinds(),
            vec![FailureKind::InvalidNumber, FailureKind::InvalidDateFormat]
        );
    }

    #[test]
    fn test_add_bad_amount_builds_no_entry() {
        let (command, reporter) = run("add income abc lunch /on 2024-01-01");
        assert_eq!(command, Command::Error { kind: FailureKind::InvalidNumber });
        assert_eq!(
            reporter.failures(),
            [ParseFailure::InvalidNumber { given: "abc".to_string() }]
        );
    }

    #[test]
    fn test_add_missing_date_marker() {
        let (command, reporter) = run("add income 50 lunch 2024-01-01 /tag food");
        assert_eq!(command, Command::Error { kind: FailureKind::MissingDate });
        assert_eq!(reporter.failures(), [ParseFailure::MissingDate]);
    }

    #[test]
    fn test_add_uses_context_date_format() {
        let context = DispatchContext {
            mode: Mode::Entry,
            date_format: "%d/%m/%Y",
        };
        let mut reporter = CollectingReporter::new();
        let command = dispatch(
            &RawInput::new("add income 5 refund /on 02/01/2024"),
            &context,
            &mut reporter,
        );

        match command {
            Command::AddEntry(entry) => {
                assert_eq!(entry.fields.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
            },
            other => panic!("expected entry, got {other:?}"),
        }
    }

    // ===============
    // Modify Tests
    // ===============

    #[test]
    fn test_modify_parses_position() {
        assert_eq!(assert_clean("modify 4"), Command::Modify { position: 4 });
    }

    #[test]
    fn test_modify_rejects_non_integer_and_missing() {
        for line in ["modify abc", "modify", "modify 1.5", "modify  4"] {
            let (command, reporter) = run(line);
            assert_eq!(command, Command::Error { kind: FailureKind::InvalidModifyFormat }, "{line:?}");
            assert_eq!(reporter.failures(), [ParseFailure::InvalidModifyFormat], "{line:?}");
        }
    }

    // ============
    // Sort Tests
    // ============

    #[test]
    fn test_sort_with_criterion() {
        assert_eq!(
            assert_clean("sort amount"),
            Command::Sort { criterion: "amount".to_string() }
        );
    }

    #[test]
    fn test_sort_without_criterion_names_mode() {
        let context = DispatchContext {
            mode: Mode::Debt,
            date_format: DEFAULT_DATE_FORMAT,
        };
        let mut reporter = CollectingReporter::new();
        let command = dispatch(&RawInput::new("sort"), &context, &mut reporter);

        assert_eq!(command, Command::Error { kind: FailureKind::InvalidSort });
        assert_eq!(reporter.failures(), [ParseFailure::InvalidSort { mode: Mode::Debt }]);
    }

    #[test]
    fn test_sort_empty_token_is_missing() {
        let (_, reporter) = run("sort  amount");
        assert_eq!(reporter.failures(), [ParseFailure::InvalidSort { mode: Mode::Entry }]);
    }

    // ======================
    // Done / Remove Tests
    // ======================

    #[test]
    fn test_done_carries_raw_index() {
        assert_eq!(assert_clean("done 2"), Command::Complete { index: "2".to_string() });
        assert_eq!(assert_clean("done two"), Command::Complete { index: "two".to_string() });
    }

    #[test]
    fn test_done_without_index_reminds_usage() {
        let (command, reporter) = run("done");
        assert_eq!(command, Command::Error { kind: FailureKind::UsageReminder });
        assert_eq!(
            reporter.failures(),
            [ParseFailure::UsageReminder { verb: IndexedVerb::Done }]
        );

        let (_, reporter) = run("done ");
        assert_eq!(reporter.kinds(), vec![FailureKind::UsageReminder]);
    }

    #[test]
    fn test_remove_without_index_reminds_usage() {
        let (_, reporter) = run("remove");
        assert_eq!(
            reporter.failures(),
            [ParseFailure::UsageReminder { verb: IndexedVerb::Remove }]
        );
    }

    // =====================
    // Find / List Tests
    // =====================

    #[test]
    fn test_find_takes_rest_verbatim() {
        assert_eq!(
            assert_clean("find  two  spaces"),
            Command::Find { term: " two  spaces".to_string() }
        );
        assert_eq!(assert_clean("find"), Command::Find { term: String::new() });
    }

    #[test]
    fn test_list_ignores_arguments() {
        assert_eq!(assert_clean("list everything"), Command::List);
    }

    // ===================
    // Typed Add Tests
    // ===================

    #[test]
    fn test_typed_add_descriptions() {
        assert_eq!(
            assert_clean("todo read book"),
            Command::AddTodo { description: "read book".to_string() }
        );
        assert_eq!(
            assert_clean("deadline essay /by 2024-05-01"),
            Command::AddDeadline { description: "essay /by 2024-05-01".to_string() }
        );
    }

    #[test]
    fn test_typed_add_bare_verb_is_invalid_command() {
        for line in ["todo", "event", "deadline"] {
            let (command, reporter) = run(line);
            assert_eq!(command, Command::Error { kind: FailureKind::InvalidCommand });
            assert_eq!(
                reporter.failures(),
                [ParseFailure::InvalidCommand { verb: line.to_string() }]
            );
        }
    }

    #[test]
    fn test_typed_add_trailing_space_gives_empty_description() {
        assert_eq!(
            assert_clean("todo "),
            Command::AddTodo { description: String::new() }
        );
    }

    // =================
    // Mode Verb Tests
    // =================

    #[test]
    fn test_mode_verbs() {
        assert_eq!(assert_clean("debts"), Command::SwitchMode { mode: Mode::Debt });
        assert_eq!(assert_clean("dolla"), Command::SwitchMode { mode: Mode::Dolla });
    }
}
