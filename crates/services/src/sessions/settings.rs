use stroke_core::model::{EngineConfig, Glyph, Level};

/// Startup configuration for a `SessionController`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Character loaded when the session starts.
    pub seed: Glyph,
    /// Level shown first; falls back to the lowest known level if absent.
    pub initial_level: Level,
    /// Base engine options; visibility flags are overridden per mode.
    pub engine: EngineConfig,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            seed: Glyph::SEED,
            initial_level: Level::first(),
            engine: EngineConfig::default(),
        }
    }
}

impl SessionSettings {
    #[must_use]
    pub fn with_seed(mut self, seed: Glyph) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_initial_level(mut self, level: Level) -> Self {
        self.initial_level = level;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }
}
