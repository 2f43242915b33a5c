//! Record book modes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The record book the interpreter is currently working in.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Home screen.
    #[default]
    Dolla,
    /// Income and expense entries.
    Entry,
    /// Money owed to or by others.
    Debt,
    /// Budgets and saving goals.
    Limit,
    /// Saved entry templates.
    Shortcut,
}

impl Mode {
    /// Resolve the verb that switches into a mode, e.g. `entries`.
    #[must_use]
    pub fn from_switch_verb(verb: &str) -> Option<Self> {
        match verb {
            "dolla" => Some(Self::Dolla),
            "entries" => Some(Self::Entry),
            "debts" => Some(Self::Debt),
            "limits" => Some(Self::Limit),
            "shortcuts" => Some(Self::Shortcut),
            _ => None,
        }
    }

    /// Lowercase name, as shown to the user.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dolla => "dolla",
            Self::Entry => "entry",
            Self::Debt => "debt",
            Self::Limit => "limit",
            Self::Shortcut => "shortcut",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
