//! Seam to the external stroke rendering and recognition engine.
//!
//! The controller never calls back into engine internals. It hands the engine
//! an [`EngineHandle`] per character load and later receives [`EngineEvent`]s
//! tagged with that handle through `SessionController::dispatch`.

use serde::{Deserialize, Serialize};
use std::fmt;

use stroke_core::model::{EngineConfig, Glyph};

use crate::error::EngineError;

/// Monotonic token identifying one engine instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation({})", self.0)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an engine instance: the character it was created for plus its
/// generation. Two handles are equal only if both match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineHandle {
    generation: Generation,
    glyph: Glyph,
}

impl EngineHandle {
    #[must_use]
    pub fn new(generation: Generation, glyph: Glyph) -> Self {
        Self { generation, glyph }
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn glyph(&self) -> Glyph {
        self.glyph
    }
}

/// What happened inside an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEventKind {
    /// Stroke data arrived; exactly one of this or `LoadFailed` per instance.
    LoadSucceeded { stroke_count: u32 },
    LoadFailed,
    /// Wrong stroke drawn while quizzing. `stroke_index` is 0-based.
    MistakeOccurred { stroke_index: u32 },
    /// Stroke `stroke_index` (0-based, increasing) was drawn correctly.
    StrokeCorrect { stroke_index: u32 },
    /// Fired once after the final stroke is drawn correctly.
    QuizCompleted,
    /// Fired once when a full stroke-order animation finishes.
    AnimationCompleted,
}

/// An engine event tagged with the instance that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineEvent {
    pub handle: EngineHandle,
    pub kind: EngineEventKind,
}

impl EngineEvent {
    #[must_use]
    pub fn new(handle: EngineHandle, kind: EngineEventKind) -> Self {
        Self { handle, kind }
    }
}

/// Capability surface the session needs from a stroke engine.
///
/// Every method is fire-and-forget. Results come back later as
/// [`EngineEvent`]s carrying the same handle, delivered in the order they
/// happened.
pub trait StrokeEngine {
    /// Build an instance for `handle.glyph()`.
    ///
    /// On success the engine must later report exactly one of
    /// `LoadSucceeded` or `LoadFailed` for this handle.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Instantiation` if the instance cannot be built at all.
    fn create_instance(
        &mut self,
        handle: EngineHandle,
        config: &EngineConfig,
    ) -> Result<(), EngineError>;

    /// Play the stroke order once, then report `AnimationCompleted`.
    ///
    /// Has no effect if the instance is already animating.
    fn animate(&mut self, handle: EngineHandle);

    /// Begin capturing strokes and reporting quiz events.
    fn start_quiz(&mut self, handle: EngineHandle);

    /// Idempotent: reveal the outline as a drawing aid.
    fn show_outline(&mut self, handle: EngineHandle);

    /// Idempotent: hide the outline again.
    fn hide_outline(&mut self, handle: EngineHandle);
}
