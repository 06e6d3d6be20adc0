use serde::{Deserialize, Serialize};

use stroke_core::model::Severity;
use stroke_core::scoring;

/// One line of learner-facing feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
}

impl Feedback {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    // ─── Session messages ──────────────────────────────────────────────────────

    pub(crate) fn invalid_input() -> Self {
        Self::error("Please enter a valid Chinese character")
    }

    pub(crate) fn draw_instruction() -> Self {
        Self::info("Draw the character stroke by stroke")
    }

    pub(crate) fn mistake(stroke_index: u32, stroke_count: u32) -> Self {
        Self::error(format!(
            "Try again! Stroke {}/{stroke_count}",
            stroke_index.saturating_add(1)
        ))
    }

    pub(crate) fn progress(remaining: u32) -> Option<Self> {
        scoring::remaining_label(remaining).map(|label| Self::success(format!("Correct! {label}")))
    }

    pub(crate) fn completed(accuracy: u32) -> Self {
        Self::success(format!("Excellent! Completed with {accuracy}% accuracy"))
    }

    pub(crate) fn outline_shown() -> Self {
        Self::info("Outline shown - trace the character!")
    }

    pub(crate) fn outline_hidden() -> Self {
        Self::info("Outline hidden")
    }

    pub(crate) fn stroke_data_unavailable() -> Self {
        Self::error("Character stroke data not available")
    }

    pub(crate) fn load_error() -> Self {
        Self::error("Error loading character")
    }
}

/// Presentation side of the feedback line.
///
/// The session pushes every change here; rendering is up to the implementor.
pub trait FeedbackSink {
    fn show(&mut self, feedback: &Feedback);
    fn clear(&mut self);
}

/// Sink that drops everything, for callers that only read `SessionView`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn show(&mut self, _feedback: &Feedback) {}

    fn clear(&mut self) {}
}
