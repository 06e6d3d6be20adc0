use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Mode;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineConfigError {
    #[error("canvas width and height must be > 0")]
    InvalidCanvasSize,

    #[error("padding ({padding}) must be less than half the canvas size")]
    InvalidPadding { padding: u32 },

    #[error("stroke animation speed must be finite and > 0")]
    InvalidAnimationSpeed,

    #[error("drawing width must be > 0")]
    InvalidDrawingWidth,

    #[error("hint threshold must be at least one miss")]
    InvalidHintThreshold,

    #[error("'{value}' is not a #rgb or #rrggbb colour")]
    InvalidColor { value: String },
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Every option the stroke engine recognises when an instance is created.
///
/// `show_outline` and `show_character` are mode-dependent; use
/// [`EngineConfig::for_mode`] instead of setting them by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    width: u32,
    height: u32,
    padding: u32,
    show_outline: bool,
    show_character: bool,
    stroke_animation_speed: f32,
    delay_between_strokes_ms: u32,
    stroke_color: String,
    outline_color: String,
    drawing_color: String,
    drawing_width: u32,
    show_hint_after_misses: u32,
    highlight_on_complete: bool,
    highlight_color: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 280,
            height: 280,
            padding: 10,
            show_outline: true,
            show_character: true,
            stroke_animation_speed: 1.0,
            delay_between_strokes_ms: 200,
            stroke_color: "#333".to_string(),
            outline_color: "#ddd".to_string(),
            drawing_color: "#667eea".to_string(),
            drawing_width: 6,
            show_hint_after_misses: 3,
            highlight_on_complete: true,
            highlight_color: "#4CAF50".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` for malformed JSON. Validation is separate,
    /// see [`EngineConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Check every option for a value the engine cannot use.
    ///
    /// # Errors
    ///
    /// Returns the first `EngineConfigError` found.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineConfigError::InvalidCanvasSize);
        }
        if self.padding.saturating_mul(2) >= self.width.min(self.height) {
            return Err(EngineConfigError::InvalidPadding {
                padding: self.padding,
            });
        }
        if !self.stroke_animation_speed.is_finite() || self.stroke_animation_speed <= 0.0 {
            return Err(EngineConfigError::InvalidAnimationSpeed);
        }
        if self.drawing_width == 0 {
            return Err(EngineConfigError::InvalidDrawingWidth);
        }
        if self.show_hint_after_misses == 0 {
            return Err(EngineConfigError::InvalidHintThreshold);
        }
        for color in [
            &self.stroke_color,
            &self.outline_color,
            &self.drawing_color,
            &self.highlight_color,
        ] {
            validate_color(color)?;
        }
        Ok(())
    }

    /// Copy of this config with glyph visibility set for `mode`.
    ///
    /// View shows both outline and character; Practice hides them until a hint
    /// is requested.
    #[must_use]
    pub fn for_mode(&self, mode: Mode) -> Self {
        let visible = !mode.is_practice();
        Self {
            show_outline: visible,
            show_character: visible,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_hint_after_misses(mut self, misses: u32) -> Self {
        self.show_hint_after_misses = misses;
        self
    }

    #[must_use]
    pub fn with_canvas(mut self, width: u32, height: u32, padding: u32) -> Self {
        self.width = width;
        self.height = height;
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, speed: f32, delay_between_strokes_ms: u32) -> Self {
        self.stroke_animation_speed = speed;
        self.delay_between_strokes_ms = delay_between_strokes_ms;
        self
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn padding(&self) -> u32 {
        self.padding
    }

    #[must_use]
    pub fn show_outline(&self) -> bool {
        self.show_outline
    }

    #[must_use]
    pub fn show_character(&self) -> bool {
        self.show_character
    }

    #[must_use]
    pub fn stroke_animation_speed(&self) -> f32 {
        self.stroke_animation_speed
    }

    #[must_use]
    pub fn delay_between_strokes_ms(&self) -> u32 {
        self.delay_between_strokes_ms
    }

    #[must_use]
    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    #[must_use]
    pub fn outline_color(&self) -> &str {
        &self.outline_color
    }

    #[must_use]
    pub fn drawing_color(&self) -> &str {
        &self.drawing_color
    }

    #[must_use]
    pub fn drawing_width(&self) -> u32 {
        self.drawing_width
    }

    /// Consecutive misses on one stroke before the engine reveals a hint.
    #[must_use]
    pub fn show_hint_after_misses(&self) -> u32 {
        self.show_hint_after_misses
    }

    #[must_use]
    pub fn highlight_on_complete(&self) -> bool {
        self.highlight_on_complete
    }

    #[must_use]
    pub fn highlight_color(&self) -> &str {
        &self.highlight_color
    }
}

fn validate_color(value: &str) -> Result<(), EngineConfigError> {
    let valid = value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(EngineConfigError::InvalidColor {
            value: value.to_string(),
        })
    }
}
