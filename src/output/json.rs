//! JSON output formatting for dolla.

use serde::Serialize;
use serde_json::json;

use crate::core::Mode;
use crate::error::DollaError;
use crate::parser::Command;

/// Format a parsed command as JSON, with the mode it was read in.
///
/// # Errors
///
/// Returns `DollaError::Parse` if JSON serialization fails.
pub fn format_command_json(command: &Command, mode: Mode) -> Result<String, DollaError> {
    let output = json!({
        "mode": mode,
        "ok": !command.is_error(),
        "parsed": command,
    });
    to_json(&output)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `DollaError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, DollaError> {
    Ok(serde_json::to_string_pretty(value)?)
}
