//! Output formatting for dolla.
//!
//! This module renders parsed commands as colored text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::Mode;
use crate::error::DollaError;
use crate::parser::Command;

pub use json::*;
pub use pretty::*;

/// Format a parsed command based on output format
///
/// # Errors
///
/// Returns `DollaError::Parse` if JSON serialization fails.
pub fn format_command(
    command: &Command,
    mode: Mode,
    format: OutputFormat,
) -> Result<String, DollaError> {
    match format {
        OutputFormat::Pretty => Ok(format_command_pretty(command)),
        OutputFormat::Json => format_command_json(command, mode),
    }
}
