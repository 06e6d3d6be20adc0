use serde::Serialize;

use stroke_core::model::{Glyph, Level, Mode};

/// Mutable state of one learning session.
///
/// Owned by exactly one `SessionController`; nothing else writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub current_character: Glyph,
    pub current_level: Level,
    pub mode: Mode,
    /// Strokes in `current_character`, 0 until the engine confirms the load.
    pub stroke_count: u32,
    /// Wrong strokes in the current practice attempt.
    pub mistake_count: u32,
    /// Outline hint toggled on; only ever true in practice mode.
    pub hint_visible: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(seed: Glyph, level: Level) -> Self {
        Self {
            current_character: seed,
            current_level: level,
            mode: Mode::View,
            stroke_count: 0,
            mistake_count: 0,
            hint_visible: false,
        }
    }

    /// Reset per-character counters before `character` is (re)loaded.
    pub(crate) fn begin_load(&mut self, character: Glyph) {
        self.current_character = character;
        self.stroke_count = 0;
        self.mistake_count = 0;
        self.hint_visible = false;
    }
}
