//! Configuration management for dolla.
//!
//! This module handles loading and saving configuration from `~/.dolla/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ParserConfig};
