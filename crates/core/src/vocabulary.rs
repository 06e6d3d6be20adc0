use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::data;
use crate::model::{CharacterEntry, Glyph, GlyphError, Level};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("vocabulary JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("'{raw}' is not a valid level key")]
    InvalidLevel { raw: String },

    #[error("invalid character in level {level}: {source}")]
    InvalidCharacter {
        level: Level,
        #[source]
        source: GlyphError,
    },

    #[error("character {character} appears twice in level {level}")]
    DuplicateCharacter { level: Level, character: Glyph },

    #[error("vocabulary has no entries")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct JsonEntry {
    #[serde(rename = "char")]
    character: String,
    pinyin: String,
    meaning: String,
}

/// Read-only lookup of character metadata grouped by proficiency level.
///
/// Levels are kept in ascending order and entries keep their source order.
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyIndex {
    levels: BTreeMap<Level, Vec<CharacterEntry>>,
}

impl VocabularyIndex {
    /// The HSK table shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut levels = BTreeMap::new();
        for (raw_level, entries) in data::HSK {
            let Some(level) = Level::new(*raw_level) else {
                continue;
            };
            let entries = entries
                .iter()
                .filter_map(|(ch, pinyin, meaning)| {
                    Glyph::new(*ch)
                        .ok()
                        .map(|glyph| CharacterEntry::new(glyph, *pinyin, *meaning, level))
                })
                .collect();
            levels.insert(level, entries);
        }
        Self { levels }
    }

    /// Load a table from JSON shaped as `{"1": [{"char": "你", "pinyin": "nǐ", "meaning": "you"}]}`.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError` for malformed JSON, non-numeric or zero level
    /// keys, characters outside the supported script, duplicates within a level,
    /// or a table with no entries at all.
    pub fn from_json(raw: &str) -> Result<Self, VocabularyError> {
        let parsed: BTreeMap<String, Vec<JsonEntry>> = serde_json::from_str(raw)?;

        let mut levels = BTreeMap::new();
        for (key, raw_entries) in parsed {
            let level: Level = key
                .parse()
                .map_err(|_| VocabularyError::InvalidLevel { raw: key.clone() })?;

            let mut seen = HashSet::new();
            let mut entries = Vec::with_capacity(raw_entries.len());
            for raw_entry in raw_entries {
                let character = Glyph::try_from(raw_entry.character)
                    .map_err(|source| VocabularyError::InvalidCharacter { level, source })?;
                if !seen.insert(character) {
                    return Err(VocabularyError::DuplicateCharacter { level, character });
                }
                entries.push(CharacterEntry::new(
                    character,
                    raw_entry.pinyin,
                    raw_entry.meaning,
                    level,
                ));
            }
            if !entries.is_empty() {
                levels.insert(level, entries);
            }
        }

        if levels.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { levels })
    }

    /// Levels in ascending order.
    #[must_use]
    pub fn list_levels(&self) -> Vec<Level> {
        self.levels.keys().copied().collect()
    }

    /// Entries of `level` in source order; empty if the level is unknown.
    #[must_use]
    pub fn entries_for_level(&self, level: Level) -> &[CharacterEntry] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn has_level(&self, level: Level) -> bool {
        self.levels.contains_key(&level)
    }

    /// Find a character across all levels.
    ///
    /// Levels are scanned in ascending order; if a character appears in more
    /// than one level the lowest level wins.
    #[must_use]
    pub fn lookup(&self, character: Glyph) -> Option<&CharacterEntry> {
        self.levels
            .values()
            .flat_map(|entries| entries.iter())
            .find(|entry| entry.character() == character)
    }
}

impl Default for VocabularyIndex {
    fn default() -> Self {
        Self::builtin()
    }
}
