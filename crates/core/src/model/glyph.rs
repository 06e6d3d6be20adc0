use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// CJK Unified Ideographs, the minimum block the session accepts.
const CJK_UNIFIED_FIRST: u32 = 0x4E00;
const CJK_UNIFIED_LAST: u32 = 0x9FFF;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GlyphError {
    #[error("character input is empty")]
    Empty,

    #[error("'{ch}' is not a supported Chinese character")]
    OutsideScript { ch: char },

    #[error("expected a single character, got '{input}'")]
    MultipleCharacters { input: String },
}

/// A single Chinese character under study.
///
/// Every character the session handles goes through this type, so the
/// "one grapheme, inside the supported script" rule is checked exactly once.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Glyph(char);

impl Glyph {
    /// Character a new session starts on.
    pub const SEED: Self = Self('你');

    /// Validate a single character.
    ///
    /// # Errors
    ///
    /// Returns `GlyphError::OutsideScript` if `ch` is not a CJK unified ideograph.
    pub const fn new(ch: char) -> Result<Self, GlyphError> {
        if is_supported_script(ch) {
            Ok(Self(ch))
        } else {
            Err(GlyphError::OutsideScript { ch })
        }
    }

    /// Take the first character of free-text input, discarding the remainder.
    ///
    /// Leading and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `GlyphError::Empty` for blank input and `GlyphError::OutsideScript`
    /// when the first character is not a supported ideograph.
    pub fn from_input(input: &str) -> Result<Self, GlyphError> {
        let first = input.trim().chars().next().ok_or(GlyphError::Empty)?;
        Self::new(first)
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        self.0
    }
}

/// Returns true if `ch` belongs to the supported ideograph range.
#[must_use]
pub const fn is_supported_script(ch: char) -> bool {
    let code = ch as u32;
    code >= CJK_UNIFIED_FIRST && code <= CJK_UNIFIED_LAST
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Glyph({})", self.0)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Glyph {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s)
    }
}

impl TryFrom<String> for Glyph {
    type Error = GlyphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let first = chars.next().ok_or(GlyphError::Empty)?;
        if chars.next().is_some() {
            return Err(GlyphError::MultipleCharacters { input: value });
        }
        Self::new(first)
    }
}

impl From<Glyph> for String {
    fn from(value: Glyph) -> Self {
        value.0.to_string()
    }
}
