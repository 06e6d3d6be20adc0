//! In-process stand-in for the stroke rendering engine.
//!
//! Knows stroke counts for the builtin vocabulary and nothing else. Learner
//! strokes come from the terminal as right/wrong verdicts instead of pointer
//! input; every result is reported back through the event channel.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;
use tracing::{debug, info};

use services::{EngineError, EngineEvent, EngineEventKind, EngineHandle, StrokeEngine};
use stroke_core::model::{EngineConfig, Glyph};

#[rustfmt::skip]
const STROKE_COUNTS: &[(char, u32)] = &[
    ('你', 7), ('好', 6), ('我', 7), ('是', 9), ('不', 4), ('人', 2), ('大', 3),
    ('小', 3), ('中', 4), ('国', 8), ('一', 1), ('二', 2), ('三', 3), ('十', 2),
    ('口', 3), ('日', 4), ('月', 4), ('水', 4), ('火', 4), ('山', 3), ('上', 3),
    ('下', 3), ('天', 4), ('家', 10), ('学', 8), ('生', 5), ('爱', 10), ('猫', 11),
    ('狗', 8), ('茶', 9), ('走', 7), ('跑', 12), ('高', 10), ('长', 4), ('白', 5),
    ('红', 6), ('黑', 12), ('新', 13), ('快', 7), ('慢', 14), ('远', 7), ('近', 7),
    ('门', 3), ('手', 4), ('目', 5), ('鱼', 8), ('雨', 8), ('雪', 11), ('问', 6),
    ('笑', 10), ('春', 9), ('夏', 10), ('秋', 9), ('冬', 5), ('风', 4), ('花', 7),
    ('草', 9), ('树', 9), ('鸟', 5), ('马', 3), ('牛', 4), ('羊', 6), ('河', 8),
    ('海', 10), ('云', 4), ('星', 9), ('心', 4), ('城', 9), ('音', 9), ('乐', 5),
];

/// Stroke count for `glyph`, if stroke data exists for it.
#[must_use]
pub fn stroke_count(glyph: Glyph) -> Option<u32> {
    STROKE_COUNTS
        .iter()
        .find(|(ch, _)| *ch == glyph.as_char())
        .map(|(_, count)| *count)
}

/// Where the learner is inside one quiz.
#[derive(Debug, Clone, Copy, Default)]
struct QuizCursor {
    next_stroke: u32,
    misses_on_stroke: u32,
    finished: bool,
}

#[derive(Debug)]
struct Instance {
    handle: EngineHandle,
    config: EngineConfig,
    stroke_count: Option<u32>,
    outline_visible: bool,
    animating_until: Option<Instant>,
    quiz: Option<QuizCursor>,
    highlighted_stroke: Option<u32>,
}

/// Result of feeding one learner stroke into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeOutcome {
    /// No quiz is capturing strokes right now.
    Ignored,
    Mistake { stroke_index: u32 },
    Correct { stroke_index: u32 },
    /// The final stroke was correct.
    Completed,
}

pub struct SimulatedEngine {
    events: UnboundedSender<EngineEvent>,
    instance: Option<Instance>,
}

impl SimulatedEngine {
    #[must_use]
    pub fn new(events: UnboundedSender<EngineEvent>) -> Self {
        Self {
            events,
            instance: None,
        }
    }

    /// Stroke currently highlighted after repeated misses, if any.
    #[must_use]
    pub fn highlighted_stroke(&self) -> Option<u32> {
        self.instance.as_ref().and_then(|inst| inst.highlighted_stroke)
    }

    #[must_use]
    pub fn outline_visible(&self) -> bool {
        self.instance.as_ref().is_some_and(|inst| inst.outline_visible)
    }

    /// Judge the learner's next stroke as right or wrong.
    pub fn learner_stroke(&mut self, correct: bool) -> StrokeOutcome {
        let Some(inst) = self.instance.as_mut() else {
            return StrokeOutcome::Ignored;
        };
        let Some(stroke_count) = inst.stroke_count else {
            return StrokeOutcome::Ignored;
        };
        let Some(cursor) = inst.quiz.as_mut().filter(|cursor| !cursor.finished) else {
            return StrokeOutcome::Ignored;
        };
        let handle = inst.handle;
        let stroke_index = cursor.next_stroke;

        if !correct {
            cursor.misses_on_stroke += 1;
            let misses = cursor.misses_on_stroke;
            send(&self.events, handle, EngineEventKind::MistakeOccurred { stroke_index });
            if misses >= inst.config.show_hint_after_misses()
                && inst.highlighted_stroke != Some(stroke_index)
            {
                info!(stroke = stroke_index + 1, misses, "highlighting expected stroke");
                inst.highlighted_stroke = Some(stroke_index);
            }
            return StrokeOutcome::Mistake { stroke_index };
        }

        cursor.next_stroke += 1;
        cursor.misses_on_stroke = 0;
        inst.highlighted_stroke = None;
        send(&self.events, handle, EngineEventKind::StrokeCorrect { stroke_index });

        if cursor.next_stroke < stroke_count {
            return StrokeOutcome::Correct { stroke_index };
        }
        cursor.finished = true;
        send(&self.events, handle, EngineEventKind::QuizCompleted);
        StrokeOutcome::Completed
    }

    fn instance_for(&mut self, handle: EngineHandle) -> Option<&mut Instance> {
        self.instance
            .as_mut()
            .filter(|inst| inst.handle == handle)
    }
}

fn send(events: &UnboundedSender<EngineEvent>, handle: EngineHandle, kind: EngineEventKind) {
    if events.send(EngineEvent::new(handle, kind)).is_err() {
        debug!(?kind, "event receiver dropped");
    }
}

fn animation_length(config: &EngineConfig, strokes: u32) -> Duration {
    let per_stroke = Duration::from_millis(u64::from(config.delay_between_strokes_ms()));
    (per_stroke * strokes).div_f32(config.stroke_animation_speed())
}

impl StrokeEngine for SimulatedEngine {
    fn create_instance(
        &mut self,
        handle: EngineHandle,
        config: &EngineConfig,
    ) -> Result<(), EngineError> {
        if self.events.is_closed() {
            return Err(EngineError::Instantiation(
                "event channel closed".to_string(),
            ));
        }

        let glyph = handle.glyph();
        let strokes = stroke_count(glyph);
        debug!(%glyph, generation = %handle.generation(), ?strokes, "instance created");
        self.instance = Some(Instance {
            handle,
            config: config.clone(),
            stroke_count: strokes,
            outline_visible: config.show_outline(),
            animating_until: None,
            quiz: None,
            highlighted_stroke: None,
        });

        let kind = match strokes {
            Some(stroke_count) => EngineEventKind::LoadSucceeded { stroke_count },
            None => EngineEventKind::LoadFailed,
        };
        send(&self.events, handle, kind);
        Ok(())
    }

    fn animate(&mut self, handle: EngineHandle) {
        let events = self.events.clone();
        let Some(inst) = self.instance_for(handle) else {
            return;
        };
        let now = Instant::now();
        if inst.animating_until.is_some_and(|until| until > now) {
            return;
        }

        let length = animation_length(&inst.config, inst.stroke_count.unwrap_or(0));
        inst.animating_until = Some(now + length);
        tokio::spawn(async move {
            tokio::time::sleep(length).await;
            send(&events, handle, EngineEventKind::AnimationCompleted);
        });
    }

    fn start_quiz(&mut self, handle: EngineHandle) {
        if let Some(inst) = self.instance_for(handle) {
            inst.quiz = Some(QuizCursor::default());
        }
    }

    fn show_outline(&mut self, handle: EngineHandle) {
        if let Some(inst) = self.instance_for(handle) {
            inst.outline_visible = true;
        }
    }

    fn hide_outline(&mut self, handle: EngineHandle) {
        if let Some(inst) = self.instance_for(handle) {
            inst.outline_visible = false;
        }
    }
}
