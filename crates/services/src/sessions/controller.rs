use tracing::{debug, info, warn};

use stroke_core::model::{Glyph, GlyphError, Level, Mode};
use stroke_core::scoring;
use stroke_core::VocabularyIndex;

use crate::engine::{EngineEvent, EngineEventKind, EngineHandle, Generation, StrokeEngine};
use crate::error::SessionError;
use crate::feedback::{Feedback, FeedbackSink};
use super::progress::{QuizAttempt, QuizProgress};
use super::settings::SessionSettings;
use super::state::SessionState;
use super::view::{
    self, CUSTOM_CHARACTER_MEANING, GridCell, LevelTab, SessionView,
};

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// State machine for one learner session.
///
/// Owns the `SessionState`, drives the stroke engine and pushes feedback.
/// Learner intents arrive through the public operations; engine results
/// arrive through [`SessionController::dispatch`]. Everything runs on the
/// caller's thread and no operation blocks.
///
/// Each character load mints a fresh [`EngineHandle`]. Events carrying any
/// other handle belong to a superseded instance and are dropped, so a late
/// load result for a previous character can never touch current state.
pub struct SessionController<E, F> {
    vocabulary: VocabularyIndex,
    settings: SessionSettings,
    engine: E,
    feedback: F,
    state: SessionState,
    current_feedback: Option<Feedback>,
    generation: Generation,
    instance: Option<EngineHandle>,
    animating: bool,
    quiz: Option<QuizAttempt>,
    grid_selection: Option<Glyph>,
}

impl<E: StrokeEngine, F: FeedbackSink> SessionController<E, F> {
    /// Build a controller without touching the engine yet; call
    /// [`SessionController::start`] to load the seed character.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Config` if the engine configuration is invalid.
    pub fn new(
        vocabulary: VocabularyIndex,
        settings: SessionSettings,
        engine: E,
        feedback: F,
    ) -> Result<Self, SessionError> {
        settings.engine.validate()?;

        let level = if vocabulary.has_level(settings.initial_level) {
            settings.initial_level
        } else {
            vocabulary
                .list_levels()
                .first()
                .copied()
                .unwrap_or(settings.initial_level)
        };
        let state = SessionState::new(settings.seed, level);

        Ok(Self {
            vocabulary,
            settings,
            engine,
            feedback,
            state,
            current_feedback: None,
            generation: Generation::default(),
            instance: None,
            animating: false,
            quiz: None,
            grid_selection: None,
        })
    }

    /// Populate the grid for the initial level and load the seed character.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Engine` if the engine cannot create the first
    /// instance. The session is still usable afterwards.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.select_level(self.state.current_level);
        self.load_character(self.state.current_character)
    }

    // ─── Accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn vocabulary(&self) -> &VocabularyIndex {
        &self.vocabulary
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable engine access, for drivers that feed learner input into it.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn feedback_sink(&self) -> &F {
        &self.feedback
    }

    #[must_use]
    pub fn current_feedback(&self) -> Option<&Feedback> {
        self.current_feedback.as_ref()
    }

    /// Handle of the live engine instance, if instantiation succeeded.
    #[must_use]
    pub fn active_handle(&self) -> Option<EngineHandle> {
        self.instance
    }

    // ─── Learner intents ───────────────────────────────────────────────────────

    /// Switch the level filter. Unknown levels are ignored.
    ///
    /// Returns `true` if the grid was rebuilt. The current character is kept.
    pub fn select_level(&mut self, level: Level) -> bool {
        if self.vocabulary.entries_for_level(level).is_empty() {
            debug!(%level, "ignoring unknown level");
            return false;
        }
        self.state.current_level = level;
        self.grid_selection = None;
        debug!(%level, "level selected");
        true
    }

    /// Load the entry at `index` of the active level's grid.
    ///
    /// Out-of-range indices are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Engine` if the engine cannot create an instance.
    pub fn select_grid_character(&mut self, index: usize) -> Result<(), SessionError> {
        let Some(character) = self
            .vocabulary
            .entries_for_level(self.state.current_level)
            .get(index)
            .map(|entry| entry.character())
        else {
            debug!(index, "grid index out of range");
            return Ok(());
        };
        self.grid_selection = Some(character);
        self.load_character(character)
    }

    /// Free-text search: load the first character of `input`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` for blank or non-Chinese input
    /// (after showing error feedback), or `SessionError::Engine` if loading fails.
    pub fn search(&mut self, input: &str) -> Result<(), SessionError> {
        match Glyph::from_input(input) {
            Ok(character) => self.load_character(character),
            Err(err) => Err(self.reject_input(err)),
        }
    }

    /// Load `character` for study in the current mode.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidInput` if `character` is outside the
    /// supported script; nothing changes except the error feedback.
    /// Returns `SessionError::Engine` if the engine cannot create an instance.
    pub fn select_character(&mut self, character: char) -> Result<(), SessionError> {
        match Glyph::new(character) {
            Ok(glyph) => self.load_character(glyph),
            Err(err) => Err(self.reject_input(err)),
        }
    }

    /// Switch between view and practice. Re-selecting the current mode is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Engine` if the engine cannot rebuild the instance.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), SessionError> {
        if mode == self.state.mode {
            return Ok(());
        }
        debug!(from = %self.state.mode, to = %mode, "mode change");
        self.state.mode = mode;
        self.state.hint_visible = false;
        self.clear_feedback();

        self.load_character(self.state.current_character)?;
        if mode.is_practice() {
            self.show_feedback(Feedback::draw_instruction());
        }
        Ok(())
    }

    /// Play the stroke-order animation. View mode only.
    ///
    /// Returns `false` (and does nothing) in practice mode, while an animation
    /// is already playing, or when there is no engine instance.
    pub fn request_animation(&mut self) -> bool {
        if self.state.mode != Mode::View || self.animating {
            return false;
        }
        let Some(handle) = self.instance else {
            return false;
        };
        self.animating = true;
        self.engine.animate(handle);
        true
    }

    /// Toggle the outline hint. Practice mode only.
    ///
    /// Returns `false` (and does nothing) in view mode or without an engine instance.
    pub fn request_hint(&mut self) -> bool {
        if !self.state.mode.is_practice() {
            return false;
        }
        let Some(handle) = self.instance else {
            return false;
        };

        if self.state.hint_visible {
            self.engine.hide_outline(handle);
            self.state.hint_visible = false;
            self.show_feedback(Feedback::outline_hidden());
        } else {
            self.engine.show_outline(handle);
            self.state.hint_visible = true;
            self.show_feedback(Feedback::outline_shown());
        }
        true
    }

    /// Start the current character over.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Engine` if the engine cannot rebuild the instance.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.state.mistake_count = 0;
        self.state.hint_visible = false;
        self.clear_feedback();

        self.load_character(self.state.current_character)?;
        if self.state.mode.is_practice() {
            self.show_feedback(Feedback::draw_instruction());
        }
        Ok(())
    }

    // ─── Engine events ─────────────────────────────────────────────────────────

    /// Apply one engine event.
    ///
    /// Returns `false` if the event was discarded: it came from a superseded
    /// instance, or it is a quiz event with no quiz running.
    pub fn dispatch(&mut self, event: EngineEvent) -> bool {
        if self.instance != Some(event.handle) {
            debug!(
                generation = %event.handle.generation(),
                character = %event.handle.glyph(),
                kind = ?event.kind,
                "discarding stale engine event"
            );
            return false;
        }

        match event.kind {
            EngineEventKind::LoadSucceeded { stroke_count } => {
                self.on_load_success(event.handle, stroke_count);
                true
            }
            EngineEventKind::LoadFailed => {
                self.on_load_failure();
                true
            }
            EngineEventKind::MistakeOccurred { stroke_index } => self.on_mistake(stroke_index),
            EngineEventKind::StrokeCorrect { stroke_index } => {
                self.on_correct_stroke(stroke_index)
            }
            EngineEventKind::QuizCompleted => self.on_quiz_complete(),
            EngineEventKind::AnimationCompleted => {
                self.animating = false;
                true
            }
        }
    }

    fn on_load_success(&mut self, handle: EngineHandle, stroke_count: u32) {
        debug!(character = %handle.glyph(), stroke_count, "stroke data loaded");
        self.state.stroke_count = stroke_count;
        if self.state.mode.is_practice() {
            self.begin_quiz(handle);
        }
    }

    fn on_load_failure(&mut self) {
        warn!(character = %self.state.current_character, "stroke data not available");
        self.state.stroke_count = 0;
        self.show_feedback(Feedback::stroke_data_unavailable());
    }

    fn on_mistake(&mut self, stroke_index: u32) -> bool {
        if !self.quiz_running() {
            return false;
        }
        self.state.mistake_count = self.state.mistake_count.saturating_add(1);
        self.show_feedback(Feedback::mistake(stroke_index, self.state.stroke_count));
        true
    }

    fn on_correct_stroke(&mut self, stroke_index: u32) -> bool {
        let Some(attempt) = self.quiz.as_mut().filter(|attempt| !attempt.is_complete) else {
            return false;
        };
        attempt.record_correct(stroke_index);

        let remaining = scoring::remaining_strokes(self.state.stroke_count, stroke_index);
        if let Some(feedback) = Feedback::progress(remaining) {
            self.show_feedback(feedback);
        }
        true
    }

    fn on_quiz_complete(&mut self) -> bool {
        let Some(attempt) = self.quiz.as_mut().filter(|attempt| !attempt.is_complete) else {
            return false;
        };
        attempt.is_complete = true;
        attempt.completed_strokes = self.state.stroke_count;

        let accuracy =
            scoring::accuracy_percent(self.state.stroke_count, self.state.mistake_count);
        info!(
            character = %self.state.current_character,
            strokes = self.state.stroke_count,
            mistakes = self.state.mistake_count,
            accuracy,
            "practice attempt completed"
        );
        self.show_feedback(Feedback::completed(accuracy));
        true
    }

    // ─── View ──────────────────────────────────────────────────────────────────

    /// Snapshot of everything the output surface shows.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let character = self.state.current_character;
        let (pronunciation, meaning) = match self.vocabulary.lookup(character) {
            Some(entry) => (
                entry.pronunciation().to_string(),
                entry.meaning().to_string(),
            ),
            None => (String::new(), CUSTOM_CHARACTER_MEANING.to_string()),
        };

        let levels = self
            .vocabulary
            .list_levels()
            .into_iter()
            .map(|level| LevelTab {
                level,
                active: level == self.state.current_level,
            })
            .collect();

        let grid = self
            .vocabulary
            .entries_for_level(self.state.current_level)
            .iter()
            .map(|entry| GridCell {
                character: entry.character(),
                tooltip: entry.tooltip(),
                active: self.grid_selection == Some(entry.character()),
            })
            .collect();

        let quiz = self
            .quiz
            .filter(|_| self.state.mode.is_practice() && self.state.stroke_count > 0)
            .map(|attempt| {
                QuizProgress::new(self.state.stroke_count, self.state.mistake_count, attempt)
            });

        SessionView {
            character,
            pronunciation,
            meaning,
            stroke_count_label: view::stroke_count_label(self.state.stroke_count),
            feedback: self.current_feedback.clone(),
            mode: self.state.mode,
            levels,
            grid,
            animate: view::animate_control(self.state.mode, self.animating),
            hint: view::hint_control(self.state.mode, self.state.hint_visible),
            reset: view::reset_control(),
            quiz,
        }
    }

    // ─── Internals ─────────────────────────────────────────────────────────────

    fn load_character(&mut self, character: Glyph) -> Result<(), SessionError> {
        self.state.begin_load(character);
        self.animating = false;
        self.quiz = None;
        self.clear_feedback();

        // Retire the previous instance before anything else can reach it.
        self.instance = None;
        self.generation = self.generation.next();
        let handle = EngineHandle::new(self.generation, character);
        let config = self.settings.engine.for_mode(self.state.mode);

        debug!(
            %character,
            generation = %self.generation,
            mode = %self.state.mode,
            "creating engine instance"
        );
        if let Err(err) = self.engine.create_instance(handle, &config) {
            warn!(%character, error = %err, "engine instantiation failed");
            self.show_feedback(Feedback::load_error());
            return Err(err.into());
        }
        self.instance = Some(handle);

        if self.state.mode.is_practice() {
            self.begin_quiz(handle);
        }
        Ok(())
    }

    /// Start quiz capture once per instance.
    fn begin_quiz(&mut self, handle: EngineHandle) {
        if self.quiz.is_some() {
            return;
        }
        self.quiz = Some(QuizAttempt::default());
        self.engine.start_quiz(handle);
    }

    fn quiz_running(&self) -> bool {
        self.quiz.is_some_and(|attempt| !attempt.is_complete)
    }

    fn reject_input(&mut self, err: GlyphError) -> SessionError {
        debug!(error = %err, "rejected character input");
        self.show_feedback(Feedback::invalid_input());
        SessionError::InvalidInput(err)
    }

    fn show_feedback(&mut self, feedback: Feedback) {
        self.feedback.show(&feedback);
        self.current_feedback = Some(feedback);
    }

    fn clear_feedback(&mut self) {
        self.current_feedback = None;
        self.feedback.clear();
    }
}
