#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scoring;
pub mod vocabulary;

mod data;

pub use error::Error;
pub use model::{
    CharacterEntry, EngineConfig, EngineConfigError, Glyph, GlyphError, Level, Mode,
    ParseLevelError, Severity,
};
pub use vocabulary::{VocabularyError, VocabularyIndex};
