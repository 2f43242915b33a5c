//! Entry date parsing.
//!
//! Dates arrive as the text between the ` /on ` and ` /tag ` markers. They are
//! read with the configured `strftime` format, with a few relative words
//! accepted on top.

use chrono::{Duration, Local, NaiveDate};

/// Date format used when configuration does not override it.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an entry date relative to the local calendar day.
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_entry_date(input: &str, format: &str) -> Option<NaiveDate> {
    parse_entry_date_from(input, format, Local::now().date_naive())
}

/// Parse an entry date relative to `today`.
///
/// Supports:
/// - `today`, `tomorrow`, `yesterday`
/// - `in 3 days`, `in 2 weeks`
/// - anything matching `format` (e.g. `2024-01-01` for `%Y-%m-%d`)
#[must_use]
pub fn parse_entry_date_from(input: &str, format: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "yesterday" => return Some(today - Duration::days(1)),
        _ => {},
    }

    if let Some(date) = parse_relative_offset(input, today) {
        return Some(date);
    }

    NaiveDate::parse_from_str(input, format).ok()
}

/// Parse "in X days/weeks" patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() != 3 || parts[0] != "in" {
        return None;
    }

    let amount: i64 = parts[1].parse().ok()?;
    let days = match parts[2].trim_end_matches('s') {
        "day" => amount,
        "week" => amount.checked_mul(7)?,
        _ => return None,
    };

    today.checked_add_signed(Duration::try_days(days)?)
}
