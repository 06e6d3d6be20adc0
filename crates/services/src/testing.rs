//! Recording doubles for the engine and feedback seams, for tests and prototyping.

use std::collections::HashSet;

use stroke_core::model::{EngineConfig, Glyph};

use crate::engine::{EngineEvent, EngineEventKind, EngineHandle, StrokeEngine};
use crate::error::EngineError;
use crate::feedback::{Feedback, FeedbackSink};

/// One instruction the controller issued to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Create {
        handle: EngineHandle,
        config: EngineConfig,
    },
    Animate(EngineHandle),
    StartQuiz(EngineHandle),
    ShowOutline(EngineHandle),
    HideOutline(EngineHandle),
}

/// Engine that renders nothing and remembers every call.
///
/// Events are never raised on its own; tests build them with
/// [`RecordingEngine::event`] and feed them to `SessionController::dispatch`.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    calls: Vec<EngineCall>,
    fail_on: HashSet<Glyph>,
}

impl RecordingEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create_instance` fail for `glyph`.
    #[must_use]
    pub fn failing_on(mut self, glyph: Glyph) -> Self {
        self.fail_on.insert(glyph);
        self
    }

    pub fn set_failing(&mut self, glyph: Glyph, failing: bool) {
        if failing {
            self.fail_on.insert(glyph);
        } else {
            self.fail_on.remove(&glyph);
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Handles passed to successful `create_instance` calls, oldest first.
    #[must_use]
    pub fn created(&self) -> Vec<EngineHandle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::Create { handle, .. } => Some(*handle),
                _ => None,
            })
            .collect()
    }

    /// Config of the most recent successful `create_instance`.
    #[must_use]
    pub fn last_config(&self) -> Option<&EngineConfig> {
        self.calls.iter().rev().find_map(|call| match call {
            EngineCall::Create { config, .. } => Some(config),
            _ => None,
        })
    }

    /// Build an event for the most recently created instance.
    #[must_use]
    pub fn event(&self, kind: EngineEventKind) -> Option<EngineEvent> {
        self.created()
            .last()
            .map(|handle| EngineEvent::new(*handle, kind))
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&EngineCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl StrokeEngine for RecordingEngine {
    fn create_instance(
        &mut self,
        handle: EngineHandle,
        config: &EngineConfig,
    ) -> Result<(), EngineError> {
        if self.fail_on.contains(&handle.glyph()) {
            return Err(EngineError::Instantiation(format!(
                "refusing to build {}",
                handle.glyph()
            )));
        }
        self.calls.push(EngineCall::Create {
            handle,
            config: config.clone(),
        });
        Ok(())
    }

    fn animate(&mut self, handle: EngineHandle) {
        self.calls.push(EngineCall::Animate(handle));
    }

    fn start_quiz(&mut self, handle: EngineHandle) {
        self.calls.push(EngineCall::StartQuiz(handle));
    }

    fn show_outline(&mut self, handle: EngineHandle) {
        self.calls.push(EngineCall::ShowOutline(handle));
    }

    fn hide_outline(&mut self, handle: EngineHandle) {
        self.calls.push(EngineCall::HideOutline(handle));
    }
}

/// Feedback sink that keeps the whole history and the visible line.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    history: Vec<Feedback>,
    visible: Option<Feedback>,
    clears: usize,
}

impl RecordingFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message shown, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    /// What the feedback line currently shows.
    #[must_use]
    pub fn visible(&self) -> Option<&Feedback> {
        self.visible.as_ref()
    }

    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl FeedbackSink for RecordingFeedback {
    fn show(&mut self, feedback: &Feedback) {
        self.history.push(feedback.clone());
        self.visible = Some(feedback.clone());
    }

    fn clear(&mut self) {
        self.visible = None;
        self.clears += 1;
    }
}
