use serde::Serialize;

use stroke_core::model::{Glyph, Level, Mode};

use crate::feedback::Feedback;
use super::progress::QuizProgress;

pub const PLAY_ANIMATION_LABEL: &str = "Play Animation";
pub const PLAYING_LABEL: &str = "Playing...";
pub const SHOW_HINT_LABEL: &str = "Show Hint";
pub const HIDE_HINT_LABEL: &str = "Hide Hint";
pub const RESET_LABEL: &str = "Reset";

/// Placeholder meaning for characters missing from the vocabulary.
pub const CUSTOM_CHARACTER_MEANING: &str = "(Custom character)";

/// Enabled flag and label of one action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub enabled: bool,
    pub label: &'static str,
}

/// One entry of the level selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelTab {
    pub level: Level,
    pub active: bool,
}

/// One button of the character grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub character: Glyph,
    pub tooltip: String,
    pub active: bool,
}

/// Everything the output surface shows, as of one moment.
///
/// Built by `SessionController::view`; holds no references back into the
/// session, so presenters can keep or serialize it freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub character: Glyph,
    pub pronunciation: String,
    pub meaning: String,
    /// `"Total strokes: N"` once the current character loaded, else empty.
    pub stroke_count_label: String,
    pub feedback: Option<Feedback>,
    pub mode: Mode,
    pub levels: Vec<LevelTab>,
    pub grid: Vec<GridCell>,
    pub animate: ControlState,
    pub hint: ControlState,
    pub reset: ControlState,
    /// Present while practising a character whose strokes are known.
    pub quiz: Option<QuizProgress>,
}

pub(crate) fn stroke_count_label(stroke_count: u32) -> String {
    if stroke_count == 0 {
        String::new()
    } else {
        format!("Total strokes: {stroke_count}")
    }
}

pub(crate) fn animate_control(mode: Mode, animating: bool) -> ControlState {
    ControlState {
        enabled: mode == Mode::View && !animating,
        label: if animating {
            PLAYING_LABEL
        } else {
            PLAY_ANIMATION_LABEL
        },
    }
}

pub(crate) fn hint_control(mode: Mode, hint_visible: bool) -> ControlState {
    ControlState {
        enabled: mode == Mode::Practice,
        label: if hint_visible {
            HIDE_HINT_LABEL
        } else {
            SHOW_HINT_LABEL
        },
    }
}

pub(crate) fn reset_control() -> ControlState {
    ControlState {
        enabled: true,
        label: RESET_LABEL,
    }
}
