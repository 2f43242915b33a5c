//! Field extraction for structured arguments.
//!
//! Entry lines look like `add expense 12.50 lunch /on 2024-01-01 /tag food`.
//! The head before ` /on ` holds the verb, type, amount and description; the
//! tail holds the date and an optional tag.

use crate::core::parse_entry_date;
use crate::report::{ErrorReporter, ParseFailure};

use super::command::{EntryType, ParsedArguments};
use super::tokenizer::RawInput;

/// Separates the description from the date.
pub const DATE_MARKER: &str = " /on ";

/// Separates the date from the tag.
pub const TAG_MARKER: &str = " /tag ";

/// Tokens before the description on an entry line: verb, type, amount.
const ENTRY_PREFIX_TOKENS: usize = 3;

/// Parse an amount, rejecting anything that is not a finite number.
///
/// # Errors
///
/// Returns [`ParseFailure::InvalidNumber`] naming `token`.
pub fn parse_amount(token: &str) -> Result<f64, ParseFailure> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseFailure::InvalidNumber {
            given: token.to_string(),
        })
}

/// Parse an amount, reporting and substituting `0.0` on failure.
///
/// Only for call sites that can carry on with a zero. Anything that would
/// store the value should use [`parse_amount`] instead.
pub fn coerce_amount(token: &str, reporter: &mut dyn ErrorReporter) -> f64 {
    parse_amount(token).unwrap_or_else(|failure| {
        reporter.report(&failure);
        0.0
    })
}

/// Check the token after `add`, reporting [`ParseFailure::InvalidEntryType`].
pub fn verify_entry_type(token: &str, reporter: &mut dyn ErrorReporter) -> Option<EntryType> {
    let entry_type = EntryType::from_token(token);
    if entry_type.is_none() {
        reporter.report(&ParseFailure::InvalidEntryType {
            given: token.to_string(),
        });
    }
    entry_type
}

/// Carve description, date and tag out of an entry line.
///
/// # Errors
///
/// - [`ParseFailure::MissingDate`] if ` /on ` is absent.
/// - [`ParseFailure::InvalidEntryFormat`] if nothing sits between the amount
///   and the date marker.
/// - [`ParseFailure::InvalidDateFormat`] if the date does not parse under
///   `date_format`.
pub fn extract_dated_fields(
    input: &RawInput,
    date_format: &str,
) -> Result<ParsedArguments, ParseFailure> {
    let (head, tail) = input
        .line()
        .split_once(DATE_MARKER)
        .ok_or(ParseFailure::MissingDate)?;

    let (date_text, tag) = match tail.split_once(TAG_MARKER) {
        Some((date_text, tag)) => (date_text, Some(tag.trim()).filter(|t| !t.is_empty())),
        None => (tail, None),
    };

    let description = entry_description(input, head).ok_or(ParseFailure::InvalidEntryFormat)?;

    let date =
        parse_entry_date(date_text, date_format).ok_or_else(|| ParseFailure::InvalidDateFormat {
            given: date_text.to_string(),
            expected: date_format.to_string(),
        })?;

    Ok(ParsedArguments {
        description: description.to_string(),
        date,
        tag: tag.map(str::to_string),
    })
}

/// The head with its `verb type amount ` prefix removed.
fn entry_description<'a>(input: &RawInput, head: &'a str) -> Option<&'a str> {
    let prefix_tokens = input.tokens().get(..ENTRY_PREFIX_TOKENS)?;
    let prefix = format!("{} ", prefix_tokens.join(" "));

    head.strip_prefix(prefix.as_str())
        .filter(|description| !description.trim().is_empty())
}
