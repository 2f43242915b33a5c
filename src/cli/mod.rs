//! Command-line surface: argument parsing and the line loop.

pub mod args;
pub mod repl;

pub use args::{Cli, OutputFormat};
pub use repl::{run_line, run_lines, RunSummary};
