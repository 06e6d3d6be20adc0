use serde::{Deserialize, Serialize};

use crate::model::{Glyph, Level};

/// Vocabulary metadata for one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    #[serde(rename = "char")]
    character: Glyph,
    #[serde(rename = "pinyin")]
    pronunciation: String,
    meaning: String,
    level: Level,
}

impl CharacterEntry {
    #[must_use]
    pub fn new(
        character: Glyph,
        pronunciation: impl Into<String>,
        meaning: impl Into<String>,
        level: Level,
    ) -> Self {
        Self {
            character,
            pronunciation: pronunciation.into(),
            meaning: meaning.into(),
            level,
        }
    }

    #[must_use]
    pub fn character(&self) -> Glyph {
        self.character
    }

    #[must_use]
    pub fn pronunciation(&self) -> &str {
        &self.pronunciation
    }

    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Hover text for the character grid: `"{pinyin} - {meaning}"`.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{} - {}", self.pronunciation, self.meaning)
    }
}
