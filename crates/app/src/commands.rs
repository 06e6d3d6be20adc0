//! Line commands typed at the prompt and how they drive the session.

use std::fmt;

use tracing::debug;

use services::{FeedbackSink, SessionController};
use stroke_core::model::{Level, Mode};

use crate::engine::{SimulatedEngine, StrokeOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Level(Level),
    /// 1-based position in the character grid.
    Pick(usize),
    Search(String),
    Mode(Mode),
    Animate,
    Hint,
    Reset,
    Stroke { correct: bool },
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument { command: &'static str },
    InvalidArgument { command: &'static str, raw: String },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "type a command, or 'help'"),
            CommandError::Unknown(word) => write!(f, "unknown command: {word}"),
            CommandError::MissingArgument { command } => {
                write!(f, "{command} requires an argument")
            }
            CommandError::InvalidArgument { command, raw } => {
                write!(f, "invalid argument for {command}: {raw}")
            }
        }
    }
}

impl std::error::Error for CommandError {}

pub fn print_help() {
    println!("Commands:");
    println!("  level <n>          switch the character grid to HSK level n");
    println!("  pick <i>           study the i-th character of the grid");
    println!("  search <text>      study the first character of text");
    println!("  view | practice    switch mode");
    println!("  animate            play the stroke order (view mode)");
    println!("  hint               toggle the outline (practice mode)");
    println!("  reset              start the current character over");
    println!("  stroke ok|miss     draw the next stroke right or wrong (practice mode)");
    println!("  show | json        print the session as text or JSON");
    println!("  help | quit");
}

fn argument<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command });
    }
    Ok(rest)
}

fn invalid(command: &'static str, raw: &str) -> CommandError {
    CommandError::InvalidArgument {
        command,
        raw: raw.to_string(),
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word {
            "" => Err(CommandError::Empty),
            "level" => {
                let raw = argument(rest, "level")?;
                raw.parse().map(Self::Level).map_err(|_| invalid("level", raw))
            }
            "pick" => {
                let raw = argument(rest, "pick")?;
                match raw.parse::<usize>() {
                    Ok(index) if index > 0 => Ok(Self::Pick(index)),
                    _ => Err(invalid("pick", raw)),
                }
            }
            // Blank search text is the session's call to reject.
            "search" => Ok(Self::Search(rest.to_string())),
            "view" => Ok(Self::Mode(Mode::View)),
            "practice" => Ok(Self::Mode(Mode::Practice)),
            "animate" => Ok(Self::Animate),
            "hint" => Ok(Self::Hint),
            "reset" => Ok(Self::Reset),
            "stroke" => match argument(rest, "stroke")? {
                "ok" => Ok(Self::Stroke { correct: true }),
                "miss" => Ok(Self::Stroke { correct: false }),
                raw => Err(invalid("stroke", raw)),
            },
            "show" => Ok(Self::Show),
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What the prompt loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redraw the session screen.
    Render,
    /// Nothing new to draw yet; results arrive as engine events.
    Wait,
    PrintJson,
    PrintHelp,
    Quit,
}

/// Apply one command to the session.
///
/// Session errors are already shown to the learner as feedback, so they are
/// only logged here.
pub fn execute<F: FeedbackSink>(
    controller: &mut SessionController<SimulatedEngine, F>,
    command: Command,
) -> Flow {
    let result = match command {
        Command::Level(level) => {
            if !controller.select_level(level) {
                println!("no characters for level {level}");
            }
            Ok(())
        }
        Command::Pick(position) => match position.checked_sub(1) {
            Some(index) => controller.select_grid_character(index),
            None => Ok(()),
        },
        Command::Search(text) => controller.search(&text),
        Command::Mode(mode) => controller.set_mode(mode),
        Command::Animate => {
            if !controller.request_animation() {
                println!("animation is only available in view mode once the current one ends");
            }
            return Flow::Wait;
        }
        Command::Hint => {
            if !controller.request_hint() {
                println!("hints are only available in practice mode");
            }
            Ok(())
        }
        Command::Reset => controller.reset(),
        Command::Stroke { correct } => {
            if controller.engine_mut().learner_stroke(correct) == StrokeOutcome::Ignored {
                println!("no quiz is running; switch to practice mode first");
            }
            return Flow::Wait;
        }
        Command::Show => Ok(()),
        Command::Json => return Flow::PrintJson,
        Command::Help => return Flow::PrintHelp,
        Command::Quit => return Flow::Quit,
    };

    if let Err(err) = result {
        debug!(error = %err, "command failed");
    }
    Flow::Render
}
