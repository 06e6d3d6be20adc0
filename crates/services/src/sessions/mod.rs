mod controller;
mod progress;
mod settings;
mod state;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::SessionController;
pub use progress::QuizProgress;
pub use settings::SessionSettings;
pub use state::SessionState;
pub use view::{
    CUSTOM_CHARACTER_MEANING, ControlState, GridCell, HIDE_HINT_LABEL, LevelTab,
    PLAY_ANIMATION_LABEL, PLAYING_LABEL, RESET_LABEL, SHOW_HINT_LABEL, SessionView,
};
