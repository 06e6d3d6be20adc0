//! Text rendering of the session for a plain terminal.

use std::fmt;
use std::io::{self, Write};

use tracing::warn;

use services::session::ControlState;
use services::{Feedback, FeedbackSink, SessionView};
use stroke_core::model::Severity;

/// Writes each feedback message on its own line as it happens.
pub struct TerminalFeedback<W = io::Stdout> {
    out: W,
}

impl TerminalFeedback {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalFeedback<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FeedbackSink for TerminalFeedback<W> {
    fn show(&mut self, feedback: &Feedback) {
        if let Err(err) = writeln!(self.out, "{}", FeedbackLine(feedback)) {
            warn!(error = %err, "failed to write feedback");
        }
    }

    // The line is redrawn with the next screen.
    fn clear(&mut self) {}
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "·",
        Severity::Success => "✓",
        Severity::Error => "✗",
    }
}

struct FeedbackLine<'a>(&'a Feedback);

impl fmt::Display for FeedbackLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", marker(self.0.severity), self.0.message)
    }
}

/// Enabled controls in brackets, disabled ones in parentheses.
struct ControlLabel<'a>(&'a ControlState);

impl fmt::Display for ControlLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.enabled {
            write!(f, "[{}]", self.0.label)
        } else {
            write!(f, "({})", self.0.label)
        }
    }
}

/// Full-screen rendering of a [`SessionView`].
pub struct Screen<'a>(pub &'a SessionView);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        write!(f, "  {}", view.character)?;
        if !view.pronunciation.is_empty() {
            write!(f, "  {}", view.pronunciation)?;
        }
        writeln!(f, "  {}", view.meaning)?;
        if !view.stroke_count_label.is_empty() {
            writeln!(f, "  {}", view.stroke_count_label)?;
        }

        write!(f, "  mode: {}  levels:", view.mode)?;
        for tab in &view.levels {
            if tab.active {
                write!(f, " [HSK {}]", tab.level)?;
            } else {
                write!(f, " HSK {}", tab.level)?;
            }
        }
        writeln!(f)?;

        for (row, cells) in view.grid.chunks(10).enumerate() {
            write!(f, " ")?;
            for (col, cell) in cells.iter().enumerate() {
                let index = row * 10 + col + 1;
                let mark = if cell.active { '*' } else { ' ' };
                write!(f, " {index:>2}{mark}{}", cell.character)?;
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for control in [&view.animate, &view.hint, &view.reset] {
            write!(f, "{} ", ControlLabel(control))?;
        }
        writeln!(f)?;

        if let Some(progress) = &view.quiz {
            writeln!(
                f,
                "  quiz: {}/{} strokes, {} mistakes, {}% accuracy",
                progress.completed_strokes, progress.stroke_count, progress.mistakes, progress.accuracy
            )?;
        }
        if let Some(feedback) = &view.feedback {
            writeln!(f, "  {}", FeedbackLine(feedback))?;
        }
        Ok(())
    }
}
