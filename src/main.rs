use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use dolla::cli::{run_line, run_lines, Cli};
use dolla::config::{Config, Paths};
use dolla::parser::Interpreter;
use dolla::report::ConsoleReporter;

fn main() {
    init_tracing();

    match run() {
        Ok(true) => {},
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            std::process::exit(1);
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOLLA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns `Ok(false)` when the given line, or any stdin line, failed to parse.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load_from_path(&Paths::default().config_file),
    }
    .context("loading configuration")?;
    config.general.color.apply();

    if cli.init_config {
        let saved = match &cli.config {
            Some(path) => config.save_to_path(path),
            None => config.save(),
        };
        saved.context("writing configuration")?;
        return Ok(true);
    }

    let format = cli.output.unwrap_or(config.general.default_output);
    let mut interpreter = Interpreter::new(ConsoleReporter::stderr())
        .with_mode(cli.mode.unwrap_or(config.general.default_mode))
        .with_date_format(config.parser.date_format.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let ok = if let Some(line) = cli.joined_line() {
        let command = run_line(&mut interpreter, &line, &mut out, format)?;
        !command.is_error()
    } else {
        let stdin = std::io::stdin();
        let summary = run_lines(&mut interpreter, stdin.lock(), &mut out, format)?;
        summary.failures == 0
    };

    out.flush()?;
    Ok(ok)
}
