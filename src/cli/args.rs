use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::Mode;

#[derive(Parser, Debug)]
#[command(name = "dolla")]
#[command(about = "Track income, expenses and tasks one line at a time")]
#[command(long_about = "dolla - a line-oriented record keeper

Interprets one command line at a time. Give a line as arguments to run it
once, or pipe lines on stdin to run many.

QUICK START:
  dolla add expense 4.50 coffee /on 2024-01-01 /tag food
  dolla todo read the book
  dolla remove 3
  printf 'entries\\nsort amount\\nbye\\n' | dolla

COMMANDS:
  add <income|expense> <amount> <description> /on <date> [/tag <tag>]
  modify <number>       sort <criterion>      find <term>
  done <number>         remove <number>       list
  todo|event|deadline <description>
  undo  redo  bye
  dolla  entries  debts  limits  shortcuts    (switch mode)

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version)]
pub struct Cli {
    /// Output format for parsed commands
    ///
    /// Overrides `general.default_output` from the config file.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of ~/.dolla/config.yaml
    #[arg(short, long, env = "DOLLA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Mode to start in
    ///
    /// Overrides `general.default_mode` from the config file.
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// A single command line to interpret; read stdin when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub line: Vec<String>,
}

impl Cli {
    /// The command line given as arguments, if any.
    #[must_use]
    pub fn joined_line(&self) -> Option<String> {
        if self.line.is_empty() {
            None
        } else {
            Some(self.line.join(" "))
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
