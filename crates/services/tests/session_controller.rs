use services::engine::EngineEventKind;
use services::session::{HIDE_HINT_LABEL, PLAYING_LABEL, PLAY_ANIMATION_LABEL, SHOW_HINT_LABEL};
use services::testing::{EngineCall, RecordingEngine, RecordingFeedback};
use services::{EngineError, NoFeedback, SessionController, SessionError, SessionSettings};
use stroke_core::model::{Glyph, GlyphError, Level, Mode, Severity};
use stroke_core::VocabularyIndex;

type Controller = SessionController<RecordingEngine, RecordingFeedback>;

fn glyph(ch: char) -> Glyph {
    Glyph::new(ch).unwrap()
}

fn started_with(engine: RecordingEngine) -> Controller {
    let mut controller = SessionController::new(
        VocabularyIndex::builtin(),
        SessionSettings::default(),
        engine,
        RecordingFeedback::new(),
    )
    .unwrap();
    controller.start().unwrap();
    controller
}

fn started() -> Controller {
    started_with(RecordingEngine::new())
}

fn fire(controller: &mut Controller, kind: EngineEventKind) -> bool {
    let event = controller.engine().event(kind).expect("an engine instance exists");
    controller.dispatch(event)
}

fn load(controller: &mut Controller, stroke_count: u32) {
    assert!(fire(
        controller,
        EngineEventKind::LoadSucceeded { stroke_count }
    ));
}

fn feedback_text(controller: &Controller) -> Option<String> {
    controller
        .current_feedback()
        .map(|feedback| feedback.message.clone())
}

/// Practice mode with a loaded character of `strokes` strokes.
fn practising(strokes: u32) -> Controller {
    let mut controller = started();
    controller.set_mode(Mode::Practice).unwrap();
    load(&mut controller, strokes);
    controller
}

/// Draw every stroke correctly, with `mistakes` misses on the first stroke.
fn complete_quiz(controller: &mut Controller, strokes: u32, mistakes: u32) {
    for _ in 0..mistakes {
        assert!(fire(
            controller,
            EngineEventKind::MistakeOccurred { stroke_index: 0 }
        ));
    }
    for stroke_index in 0..strokes {
        assert!(fire(
            controller,
            EngineEventKind::StrokeCorrect { stroke_index }
        ));
    }
    assert!(fire(controller, EngineEventKind::QuizCompleted));
}

// ─── Startup ───────────────────────────────────────────────────────────────────

#[test]
fn startup_loads_seed_in_view_mode() {
    let controller = started();
    let state = controller.state();
    assert_eq!(state.current_character, glyph('你'));
    assert_eq!(state.current_level, Level::first());
    assert_eq!(state.mode, Mode::View);
    assert_eq!(state.stroke_count, 0);
    assert!(!state.hint_visible);

    let view = controller.view();
    assert_eq!(view.pronunciation, "nǐ");
    assert_eq!(view.meaning, "you");
    assert_eq!(view.stroke_count_label, "");
    assert!(view.animate.enabled);
    assert_eq!(view.animate.label, PLAY_ANIMATION_LABEL);
    assert!(!view.hint.enabled);
    assert!(view.reset.enabled);
    assert!(view.levels.iter().filter(|tab| tab.active).count() == 1);
    assert_eq!(view.grid.len(), 30);
    assert!(view.grid.iter().all(|cell| !cell.active));
}

#[test]
fn startup_creates_visible_instance() {
    let controller = started();
    let config = controller.engine().last_config().unwrap();
    assert!(config.show_outline());
    assert!(config.show_character());
    assert_eq!(config.show_hint_after_misses(), 3);
    assert_eq!(
        controller.engine().count(|call| matches!(call, EngineCall::StartQuiz(_))),
        0
    );
}

#[test]
fn unknown_initial_level_falls_back_to_lowest() {
    let settings = SessionSettings::default().with_initial_level(Level::new(9).unwrap());
    let controller = SessionController::new(
        VocabularyIndex::builtin(),
        settings,
        RecordingEngine::new(),
        RecordingFeedback::new(),
    )
    .unwrap();
    assert_eq!(controller.state().current_level, Level::first());
}

#[test]
fn invalid_engine_config_is_rejected() {
    let engine = stroke_core::EngineConfig::default().with_hint_after_misses(0);
    let result = SessionController::new(
        VocabularyIndex::builtin(),
        SessionSettings::default().with_engine(engine),
        RecordingEngine::new(),
        RecordingFeedback::new(),
    );
    assert!(matches!(result, Err(SessionError::Config(_))));
}

#[test]
fn load_success_shows_stroke_count() {
    let mut controller = started();
    load(&mut controller, 7);
    assert_eq!(controller.state().stroke_count, 7);
    assert_eq!(controller.view().stroke_count_label, "Total strokes: 7");
}

// ─── Character selection ───────────────────────────────────────────────────────

#[test]
fn selecting_any_character_resets_mistakes_and_hint() {
    for ch in ['好', '学', '龙', '雪'] {
        let mut controller = practising(6);
        fire(
            &mut controller,
            EngineEventKind::MistakeOccurred { stroke_index: 0 },
        );
        controller.request_hint();
        assert_eq!(controller.state().mistake_count, 1);
        assert!(controller.state().hint_visible);

        controller.select_character(ch).unwrap();
        assert_eq!(controller.state().current_character, glyph(ch));
        assert_eq!(controller.state().mistake_count, 0);
        assert!(!controller.state().hint_visible);
        assert_eq!(controller.view().hint.label, SHOW_HINT_LABEL);
    }
}

#[test]
fn selecting_a_character_clears_feedback_and_stroke_count() {
    let mut controller = started();
    load(&mut controller, 7);
    controller.search("hello").unwrap_err();
    assert!(controller.current_feedback().is_some());

    controller.select_character('好').unwrap();
    assert!(controller.current_feedback().is_none());
    assert!(controller.feedback_sink().visible().is_none());
    assert_eq!(controller.state().stroke_count, 0);
    assert_eq!(controller.view().stroke_count_label, "");
}

#[test]
fn unknown_character_shows_custom_placeholder() {
    let mut controller = started();
    controller.select_character('龙').unwrap();
    let view = controller.view();
    assert_eq!(view.character, glyph('龙'));
    assert_eq!(view.pronunciation, "");
    assert_eq!(view.meaning, "(Custom character)");
}

#[test]
fn select_character_rejects_non_script() {
    let mut controller = started();
    let err = controller.select_character('a').unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidInput(GlyphError::OutsideScript { ch: 'a' })
    );
    assert_eq!(controller.state().current_character, glyph('你'));
}

#[test]
fn search_for_latin_text_is_rejected() {
    let mut controller = started();
    load(&mut controller, 7);
    let created_before = controller.engine().created().len();

    let err = controller.search("hello").unwrap_err();
    assert!(matches!(err, SessionError::InvalidInput(_)));

    let feedback = controller.current_feedback().unwrap();
    assert_eq!(feedback.severity, Severity::Error);
    assert_eq!(feedback.message, "Please enter a valid Chinese character");
    assert_eq!(controller.state().current_character, glyph('你'));
    assert_eq!(controller.state().stroke_count, 7);
    assert_eq!(controller.engine().created().len(), created_before);
}

#[test]
fn search_for_blank_text_is_rejected() {
    let mut controller = started();
    let err = controller.search("   ").unwrap_err();
    assert_eq!(err, SessionError::InvalidInput(GlyphError::Empty));
    assert_eq!(
        controller.current_feedback().unwrap().severity,
        Severity::Error
    );
}

#[test]
fn search_keeps_only_first_character() {
    let mut controller = started();
    controller.select_character('好').unwrap();
    controller.search("你好").unwrap();
    assert_eq!(controller.state().current_character, glyph('你'));
    assert_eq!(
        controller.engine().created().last().unwrap().glyph(),
        glyph('你')
    );
}

#[test]
fn search_leaves_grid_selection_alone() {
    let mut controller = started();
    controller.select_grid_character(1).unwrap();
    controller.search("山").unwrap();
    let active: Vec<_> = controller
        .view()
        .grid
        .iter()
        .filter(|cell| cell.active)
        .map(|cell| cell.character)
        .collect();
    assert_eq!(active, vec![glyph('好')]);
}

// ─── Levels and grid ───────────────────────────────────────────────────────────

#[test]
fn select_level_rebuilds_grid_without_changing_character() {
    let mut controller = started();
    controller.select_grid_character(0).unwrap();
    assert!(controller.select_level(Level::new(2).unwrap()));

    let view = controller.view();
    assert_eq!(controller.state().current_level, Level::new(2).unwrap());
    assert_eq!(view.character, glyph('你'));
    assert_eq!(view.grid.first().unwrap().character, glyph('走'));
    assert_eq!(view.grid.first().unwrap().tooltip, "zǒu - to walk");
    assert!(view.grid.iter().all(|cell| !cell.active));
    let active: Vec<_> = view.levels.iter().filter(|tab| tab.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].level, Level::new(2).unwrap());
}

#[test]
fn unknown_level_is_ignored() {
    let mut controller = started();
    assert!(!controller.select_level(Level::new(7).unwrap()));
    assert_eq!(controller.state().current_level, Level::first());
}

#[test]
fn grid_selection_loads_and_marks_entry() {
    let mut controller = started();
    controller.select_level(Level::new(3).unwrap());
    controller.select_grid_character(2).unwrap();

    let view = controller.view();
    assert_eq!(view.character, glyph('秋'));
    assert_eq!(view.meaning, "autumn");
    assert!(view.grid[2].active);
}

#[test]
fn grid_index_out_of_range_is_a_no_op() {
    let mut controller = started();
    let created_before = controller.engine().created().len();
    controller.select_grid_character(500).unwrap();
    assert_eq!(controller.engine().created().len(), created_before);
    assert_eq!(controller.state().current_character, glyph('你'));
}

// ─── Modes ─────────────────────────────────────────────────────────────────────

#[test]
fn entering_practice_hides_glyph_and_starts_quiz() {
    let mut controller = started();
    controller.set_mode(Mode::Practice).unwrap();

    let engine = controller.engine();
    let config = engine.last_config().unwrap();
    assert!(!config.show_outline());
    assert!(!config.show_character());
    let handle = *engine.created().last().unwrap();
    assert_eq!(engine.calls().last(), Some(&EngineCall::StartQuiz(handle)));

    let view = controller.view();
    assert!(!view.animate.enabled);
    assert!(view.hint.enabled);
    assert_eq!(view.hint.label, SHOW_HINT_LABEL);
    let feedback = view.feedback.unwrap();
    assert_eq!(feedback.message, "Draw the character stroke by stroke");
    assert_eq!(feedback.severity, Severity::Info);
}

#[test]
fn quiz_starts_once_per_instance() {
    let mut controller = practising(7);
    assert_eq!(
        controller.engine().count(|call| matches!(call, EngineCall::StartQuiz(_))),
        1
    );
    controller.select_character('好').unwrap();
    load(&mut controller, 6);
    assert_eq!(
        controller.engine().count(|call| matches!(call, EngineCall::StartQuiz(_))),
        2
    );
}

#[test]
fn practice_then_view_restores_startup_controls() {
    let mut controller = started();
    let initial = controller.view();

    controller.set_mode(Mode::Practice).unwrap();
    controller.request_hint();
    controller.set_mode(Mode::View).unwrap();

    let restored = controller.view();
    assert_eq!(restored.animate, initial.animate);
    assert_eq!(restored.hint, initial.hint);
    assert_eq!(restored.reset, initial.reset);
    assert!(restored.feedback.is_none());
    assert!(!controller.state().hint_visible);
    assert!(controller.engine().last_config().unwrap().show_outline());
}

#[test]
fn reselecting_current_mode_is_a_no_op() {
    let mut controller = started();
    let created_before = controller.engine().created().len();
    controller.set_mode(Mode::View).unwrap();
    assert_eq!(controller.engine().created().len(), created_before);
}

#[test]
fn mode_switch_resets_mistakes() {
    let mut controller = practising(4);
    fire(
        &mut controller,
        EngineEventKind::MistakeOccurred { stroke_index: 1 },
    );
    controller.set_mode(Mode::View).unwrap();
    assert_eq!(controller.state().mistake_count, 0);
}

// ─── Animation ─────────────────────────────────────────────────────────────────

#[test]
fn animation_disables_control_until_complete() {
    let mut controller = started();
    load(&mut controller, 7);

    assert!(controller.request_animation());
    let view = controller.view();
    assert!(!view.animate.enabled);
    assert_eq!(view.animate.label, PLAYING_LABEL);

    // Duplicate request while playing.
    assert!(!controller.request_animation());
    assert_eq!(
        controller.engine().count(|call| matches!(call, EngineCall::Animate(_))),
        1
    );

    assert!(fire(&mut controller, EngineEventKind::AnimationCompleted));
    let view = controller.view();
    assert!(view.animate.enabled);
    assert_eq!(view.animate.label, PLAY_ANIMATION_LABEL);
}

#[test]
fn animation_is_ignored_in_practice() {
    let mut controller = practising(7);
    assert!(!controller.request_animation());
    assert_eq!(
        controller.engine().count(|call| matches!(call, EngineCall::Animate(_))),
        0
    );
}

#[test]
fn reload_during_animation_re_enables_control() {
    let mut controller = started();
    controller.request_animation();
    controller.select_character('山').unwrap();
    assert!(controller.view().animate.enabled);
}

// ─── Hints ─────────────────────────────────────────────────────────────────────

#[test]
fn hint_toggles_outline_and_label() {
    let mut controller = practising(7);
    let handle = controller.active_handle().unwrap();

    assert!(controller.request_hint());
    assert!(controller.state().hint_visible);
    assert_eq!(controller.view().hint.label, HIDE_HINT_LABEL);
    assert_eq!(
        feedback_text(&controller).as_deref(),
        Some("Outline shown - trace the character!")
    );
    assert_eq!(
        controller.engine().calls().last(),
        Some(&EngineCall::ShowOutline(handle))
    );

    assert!(controller.request_hint());
    assert!(!controller.state().hint_visible);
    assert_eq!(controller.view().hint.label, SHOW_HINT_LABEL);
    assert_eq!(feedback_text(&controller).as_deref(), Some("Outline hidden"));
    assert_eq!(
        controller.engine().calls().last(),
        Some(&EngineCall::HideOutline(handle))
    );
}

#[test]
fn hint_is_ignored_in_view_mode() {
    let mut controller = started();
    assert!(!controller.request_hint());
    assert!(!controller.state().hint_visible);
    assert!(controller.current_feedback().is_none());
}

// ─── Reset ─────────────────────────────────────────────────────────────────────

#[test]
fn reset_in_practice_reloads_and_reinstructs() {
    let mut controller = practising(5);
    fire(
        &mut controller,
        EngineEventKind::MistakeOccurred { stroke_index: 0 },
    );
    controller.request_hint();
    let before = controller.active_handle().unwrap();

    controller.reset().unwrap();

    let state = controller.state();
    assert_eq!(state.mistake_count, 0);
    assert!(!state.hint_visible);
    assert_ne!(controller.active_handle().unwrap(), before);
    assert_eq!(controller.view().hint.label, SHOW_HINT_LABEL);
    assert_eq!(
        feedback_text(&controller).as_deref(),
        Some("Draw the character stroke by stroke")
    );
}

#[test]
fn reset_in_view_clears_feedback() {
    let mut controller = started();
    controller.search("abc").unwrap_err();
    controller.reset().unwrap();
    assert!(controller.current_feedback().is_none());
    assert_eq!(controller.state().current_character, glyph('你'));
}

// ─── Quiz progress ─────────────────────────────────────────────────────────────

#[test]
fn mistake_reports_stroke_position() {
    let mut controller = practising(7);
    assert!(fire(
        &mut controller,
        EngineEventKind::MistakeOccurred { stroke_index: 2 }
    ));
    assert_eq!(controller.state().mistake_count, 1);
    let feedback = controller.current_feedback().unwrap();
    assert_eq!(feedback.message, "Try again! Stroke 3/7");
    assert_eq!(feedback.severity, Severity::Error);
}

#[test]
fn progress_messages_pluralise_and_stop_at_last_stroke() {
    let mut controller = practising(3);

    fire(
        &mut controller,
        EngineEventKind::StrokeCorrect { stroke_index: 0 },
    );
    assert_eq!(
        feedback_text(&controller).as_deref(),
        Some("Correct! 2 strokes remaining")
    );

    fire(
        &mut controller,
        EngineEventKind::StrokeCorrect { stroke_index: 1 },
    );
    assert_eq!(
        feedback_text(&controller).as_deref(),
        Some("Correct! 1 stroke remaining")
    );

    let shown_before = controller.feedback_sink().history().len();
    fire(
        &mut controller,
        EngineEventKind::StrokeCorrect { stroke_index: 2 },
    );
    assert_eq!(controller.feedback_sink().history().len(), shown_before);
}

#[test]
fn perfect_quiz_reports_full_accuracy() {
    let mut controller = practising(5);
    complete_quiz(&mut controller, 5, 0);
    let feedback = controller.current_feedback().unwrap();
    assert_eq!(feedback.message, "Excellent! Completed with 100% accuracy");
    assert_eq!(feedback.severity, Severity::Success);
}

#[test]
fn equal_mistakes_report_half_accuracy() {
    let mut controller = practising(5);
    complete_quiz(&mut controller, 5, 5);
    assert_eq!(
        feedback_text(&controller).as_deref(),
        Some("Excellent! Completed with 50% accuracy")
    );
}

#[test]
fn accuracy_uses_total_strokes_as_numerator() {
    let mut controller = practising(3);
    complete_quiz(&mut controller, 3, 1);
    assert_eq!(
        feedback_text(&controller).as_deref(),
        Some("Excellent! Completed with 75% accuracy")
    );
}

#[test]
fn completion_is_reported_once() {
    let mut controller = practising(2);
    complete_quiz(&mut controller, 2, 0);
    let shown = controller.feedback_sink().history().len();
    assert!(!fire(&mut controller, EngineEventKind::QuizCompleted));
    assert!(!fire(
        &mut controller,
        EngineEventKind::MistakeOccurred { stroke_index: 0 }
    ));
    assert_eq!(controller.feedback_sink().history().len(), shown);
}

#[test]
fn quiz_progress_is_visible_while_practising() {
    let mut controller = practising(4);
    fire(
        &mut controller,
        EngineEventKind::MistakeOccurred { stroke_index: 0 },
    );
    fire(
        &mut controller,
        EngineEventKind::StrokeCorrect { stroke_index: 0 },
    );
    let progress = controller.view().quiz.unwrap();
    assert_eq!(progress.stroke_count, 4);
    assert_eq!(progress.completed_strokes, 1);
    assert_eq!(progress.remaining, 3);
    assert_eq!(progress.mistakes, 1);
    assert!(!progress.is_complete);
}

#[test]
fn quiz_events_are_ignored_in_view_mode() {
    let mut controller = started();
    load(&mut controller, 5);
    assert!(!fire(
        &mut controller,
        EngineEventKind::MistakeOccurred { stroke_index: 0 }
    ));
    assert_eq!(controller.state().mistake_count, 0);
    assert!(controller.view().quiz.is_none());
}

// ─── Stale events ──────────────────────────────────────────────────────────────

#[test]
fn stale_load_success_does_not_overwrite_stroke_count() {
    let mut controller = started();
    let stale = controller
        .engine()
        .event(EngineEventKind::LoadSucceeded { stroke_count: 7 })
        .unwrap();

    controller.select_character('学').unwrap();
    load(&mut controller, 8);

    assert!(!controller.dispatch(stale));
    assert_eq!(controller.state().stroke_count, 8);
    assert_eq!(controller.view().stroke_count_label, "Total strokes: 8");
}

#[test]
fn stale_event_for_same_character_is_discarded() {
    let mut controller = practising(7);
    let stale = controller
        .engine()
        .event(EngineEventKind::MistakeOccurred { stroke_index: 0 })
        .unwrap();

    controller.reset().unwrap();
    assert!(!controller.dispatch(stale));
    assert_eq!(controller.state().mistake_count, 0);
}

#[test]
fn stale_load_failure_is_discarded() {
    let mut controller = started();
    let stale = controller.engine().event(EngineEventKind::LoadFailed).unwrap();
    controller.select_character('山').unwrap();
    assert!(!controller.dispatch(stale));
    assert!(controller.current_feedback().is_none());
}

// ─── Failures ──────────────────────────────────────────────────────────────────

#[test]
fn load_failure_reports_missing_stroke_data() {
    let mut controller = started();
    controller.select_character('龙').unwrap();
    assert!(fire(&mut controller, EngineEventKind::LoadFailed));

    let view = controller.view();
    assert_eq!(controller.state().stroke_count, 0);
    assert_eq!(view.stroke_count_label, "");
    assert_eq!(view.meaning, "(Custom character)");
    let feedback = view.feedback.unwrap();
    assert_eq!(feedback.message, "Character stroke data not available");
    assert_eq!(feedback.severity, Severity::Error);
}

#[test]
fn instantiation_failure_keeps_session_usable() {
    let mut controller = started_with(RecordingEngine::new().failing_on(glyph('龙')));

    let err = controller.select_character('龙').unwrap_err();
    assert!(matches!(
        err,
        SessionError::Engine(EngineError::Instantiation(_))
    ));
    assert_eq!(
        feedback_text(&controller).as_deref(),
        Some("Error loading character")
    );
    assert!(controller.active_handle().is_none());
    assert_eq!(controller.view().meaning, "(Custom character)");

    // Nothing to drive without an instance.
    assert!(!controller.request_animation());

    controller.select_character('好').unwrap();
    assert!(controller.active_handle().is_some());
    assert!(controller.current_feedback().is_none());
    load(&mut controller, 6);
    assert_eq!(controller.state().stroke_count, 6);
}

#[test]
fn instantiation_failure_on_mode_switch_skips_instruction() {
    let mut controller = started();
    controller.engine_mut().set_failing(glyph('你'), true);

    controller.set_mode(Mode::Practice).unwrap_err();
    assert_eq!(controller.state().mode, Mode::Practice);
    assert_eq!(
        feedback_text(&controller).as_deref(),
        Some("Error loading character")
    );
    assert!(!controller.request_hint());

    controller.engine_mut().set_failing(glyph('你'), false);
    controller.engine_mut().clear_calls();
    controller.reset().unwrap();
    assert_eq!(
        controller.engine().count(|call| matches!(call, EngineCall::StartQuiz(_))),
        1
    );
}

// ─── Feedback sinks ────────────────────────────────────────────────────────────

#[test]
fn every_load_clears_the_feedback_line() {
    let mut controller = started();
    let clears = controller.feedback_sink().clears();
    controller.select_character('水').unwrap();
    controller.select_character('火').unwrap();
    assert_eq!(controller.feedback_sink().clears(), clears + 2);
}

#[test]
fn view_works_without_a_feedback_sink() {
    let mut controller = SessionController::new(
        VocabularyIndex::builtin(),
        SessionSettings::default().with_seed(glyph('山')),
        RecordingEngine::new(),
        NoFeedback,
    )
    .unwrap();
    controller.start().unwrap();
    controller.search("xyz").unwrap_err();

    let view = controller.view();
    assert_eq!(view.character, glyph('山'));
    assert_eq!(view.meaning, "mountain");
    assert_eq!(
        view.feedback.unwrap().message,
        "Please enter a valid Chinese character"
    );
}
