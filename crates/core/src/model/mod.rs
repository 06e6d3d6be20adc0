mod engine_config;
mod entry;
mod glyph;
mod ids;
mod mode;

pub use engine_config::{EngineConfig, EngineConfigError};
pub use entry::CharacterEntry;
pub use glyph::{Glyph, GlyphError, is_supported_script};
pub use ids::{Level, ParseLevelError};
pub use mode::{Mode, Severity};
