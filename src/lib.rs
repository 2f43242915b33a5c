//! dolla - a line-oriented record keeper
//!
//! This crate turns single input lines such as
//! `add expense 4.50 coffee /on 2024-01-01 /tag food` into validated
//! [`Command`] values, reporting malformed input through an
//! [`ErrorReporter`](report::ErrorReporter).

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;
pub mod report;

pub use cli::args::{Cli, OutputFormat};
pub use error::DollaError;
pub use parser::{Command, Interpreter};
