#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod feedback;
pub mod sessions;
pub mod testing;

pub use sessions as session;

pub use engine::{EngineEvent, EngineEventKind, EngineHandle, Generation, StrokeEngine};
pub use error::{EngineError, SessionError};
pub use feedback::{Feedback, FeedbackSink, NoFeedback};
pub use sessions::{
    QuizProgress, SessionController, SessionSettings, SessionState, SessionView,
};
