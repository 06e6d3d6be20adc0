use serde::Serialize;

use stroke_core::scoring;

/// Per-instance quiz bookkeeping kept next to `SessionState`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct QuizAttempt {
    pub completed_strokes: u32,
    pub is_complete: bool,
}

impl QuizAttempt {
    pub(crate) fn record_correct(&mut self, stroke_index: u32) {
        self.completed_strokes = self.completed_strokes.max(stroke_index.saturating_add(1));
    }
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    pub stroke_count: u32,
    pub completed_strokes: u32,
    pub remaining: u32,
    pub mistakes: u32,
    pub is_complete: bool,
    /// Accuracy so far, using the same formula as the completion message.
    pub accuracy: u32,
}

impl QuizProgress {
    pub(crate) fn new(stroke_count: u32, mistakes: u32, attempt: QuizAttempt) -> Self {
        Self {
            stroke_count,
            completed_strokes: attempt.completed_strokes,
            remaining: stroke_count.saturating_sub(attempt.completed_strokes),
            mistakes,
            is_complete: attempt.is_complete,
            accuracy: scoring::accuracy_percent(stroke_count, mistakes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracks_highest_completed_stroke() {
        let mut attempt = QuizAttempt::default();
        attempt.record_correct(0);
        attempt.record_correct(1);
        let progress = QuizProgress::new(4, 1, attempt);
        assert_eq!(progress.completed_strokes, 2);
        assert_eq!(progress.remaining, 2);
        assert_eq!(progress.accuracy, 80);
        assert!(!progress.is_complete);
    }
}
