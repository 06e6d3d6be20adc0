use serde::{Deserialize, Serialize};
use std::fmt;

/// What the learner is doing with the current character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Watch the stroke-order animation.
    #[default]
    View,
    /// Draw the character and get per-stroke feedback.
    Practice,
}

impl Mode {
    #[must_use]
    pub fn is_practice(&self) -> bool {
        matches!(self, Self::Practice)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View => f.write_str("view"),
            Self::Practice => f.write_str("practice"),
        }
    }
}

/// Severity tag attached to every feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}
