//! Quiz progress and accuracy arithmetic.
//!
//! Accuracy is `round(100 * strokes / (strokes + mistakes))`. The numerator is
//! the character's total stroke count, not the strokes attempted, so a
//! character with more strokes reports higher accuracy for the same number of
//! mistakes. That is the scoring policy the learner sees; keep it.

/// Rounded accuracy percentage for a completed quiz.
///
/// Returns 100 when nothing has been counted yet.
#[must_use]
pub fn accuracy_percent(stroke_count: u32, mistake_count: u32) -> u32 {
    let strokes = u64::from(stroke_count);
    let total = strokes + u64::from(mistake_count);
    if total == 0 {
        return 100;
    }
    // Round half up, matching how percentages are shown elsewhere.
    let percent = (200 * strokes + total) / (2 * total);
    u32::try_from(percent).unwrap_or(100)
}

/// Strokes still to draw after `stroke_index` (0-based) was completed.
#[must_use]
pub fn remaining_strokes(stroke_count: u32, stroke_index: u32) -> u32 {
    stroke_count.saturating_sub(stroke_index).saturating_sub(1)
}

/// `"1 stroke remaining"`, `"2 strokes remaining"`; `None` when nothing is left.
#[must_use]
pub fn remaining_label(remaining: u32) -> Option<String> {
    match remaining {
        0 => None,
        1 => Some("1 stroke remaining".to_string()),
        n => Some(format!("{n} strokes remaining")),
    }
}
