use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// Proficiency level used to group vocabulary (HSK 1, HSK 2, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Level(NonZeroU8);

impl Level {
    /// Creates a new `Level`; levels start at 1.
    #[must_use]
    pub fn new(level: u8) -> Option<Self> {
        NonZeroU8::new(level).map(Self)
    }

    /// The first proficiency level.
    #[must_use]
    pub fn first() -> Self {
        Self(NonZeroU8::MIN)
    }

    /// Returns the underlying level number
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0.get()
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr ───────────────────────────────────────────────────────────────────

/// Error type for parsing a level from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    raw: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid level '{}': expected a number from 1 to 255", self.raw)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU8>()
            .map(Self)
            .map_err(|_| ParseLevelError { raw: s.to_string() })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
