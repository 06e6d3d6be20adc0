use std::fmt;
use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::unbounded_channel;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use services::{EngineEventKind, FeedbackSink, SessionController, SessionSettings};
use stroke_core::VocabularyIndex;
use stroke_core::model::{Glyph, Level};

mod commands;
mod engine;
mod terminal;

use commands::{Command, Flow};
use engine::SimulatedEngine;
use terminal::{Screen, TerminalFeedback};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLevel { raw: String },
    InvalidCharacter { raw: String },
    InvalidHintAfter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLevel { raw } => write!(f, "invalid --level value: {raw}"),
            ArgsError::InvalidCharacter { raw } => write!(f, "invalid --char value: {raw}"),
            ArgsError::InvalidHintAfter { raw } => {
                write!(f, "invalid --hint-after value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--level <n>] [--char <c>] [--vocab <file.json>] [--hint-after <misses>] [--verbose]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --level 1");
    eprintln!("  --char 你");
    eprintln!("  --hint-after 3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STROKE_LEVEL, STROKE_CHAR, STROKE_VOCAB, RUST_LOG");
}

#[derive(Debug)]
struct Args {
    level: Level,
    seed: Glyph,
    vocab: Option<PathBuf>,
    hint_after: Option<u32>,
    verbose: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut level = std::env::var("STROKE_LEVEL")
            .ok()
            .and_then(|value| value.parse::<Level>().ok())
            .unwrap_or_default();
        let mut seed = std::env::var("STROKE_CHAR")
            .ok()
            .and_then(|value| Glyph::from_input(&value).ok())
            .unwrap_or(Glyph::SEED);
        let mut vocab = std::env::var_os("STROKE_VOCAB").map(PathBuf::from);
        let mut hint_after = None;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--level" => {
                    let value = require_value(args, "--level")?;
                    level = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLevel { raw: value.clone() })?;
                }
                "--char" => {
                    let value = require_value(args, "--char")?;
                    seed = Glyph::from_input(&value)
                        .map_err(|_| ArgsError::InvalidCharacter { raw: value.clone() })?;
                }
                "--vocab" => {
                    vocab = Some(PathBuf::from(require_value(args, "--vocab")?));
                }
                "--hint-after" => {
                    let value = require_value(args, "--hint-after")?;
                    let parsed: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidHintAfter { raw: value.clone() })?;
                    hint_after = Some(parsed);
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            level,
            seed,
            vocab,
            hint_after,
            verbose,
        })
    }
}

/// RUST_LOG wins over --verbose, which wins over the `info` default.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_vocabulary(path: Option<&PathBuf>) -> Result<VocabularyIndex, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(VocabularyIndex::builtin());
    };
    let raw = std::fs::read_to_string(path)?;
    let vocabulary = VocabularyIndex::from_json(&raw)?;
    info!(path = %path.display(), levels = vocabulary.list_levels().len(), "vocabulary loaded");
    Ok(vocabulary)
}

fn print_screen<F: FeedbackSink>(controller: &SessionController<SimulatedEngine, F>) {
    println!();
    print!("{}", Screen(&controller.view()));
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing(args.verbose);
    debug!(?args, "starting");

    let vocabulary = load_vocabulary(args.vocab.as_ref())?;
    let mut settings = SessionSettings::default()
        .with_seed(args.seed)
        .with_initial_level(args.level);
    if let Some(misses) = args.hint_after {
        let engine = settings.engine.clone().with_hint_after_misses(misses);
        settings = settings.with_engine(engine);
    }

    let (events_tx, mut events) = unbounded_channel();
    let mut controller = SessionController::new(
        vocabulary,
        settings,
        SimulatedEngine::new(events_tx),
        TerminalFeedback::stdout(),
    )?;
    // A failed first load is already on screen as feedback.
    if let Err(err) = controller.start() {
        debug!(error = %err, "initial load failed");
    }
    print_screen(&controller);
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match commands::execute(&mut controller, command) {
                    Flow::Render => print_screen(&controller),
                    Flow::Wait => {}
                    Flow::PrintJson => {
                        println!("{}", serde_json::to_string_pretty(&controller.view())?);
                    }
                    Flow::PrintHelp => commands::print_help(),
                    Flow::Quit => break,
                }
            }
            Some(event) = events.recv() => {
                let kind = event.kind;
                if !controller.dispatch(event) {
                    continue;
                }
                // Quiz progress prints through the feedback sink as it happens.
                if matches!(
                    kind,
                    EngineEventKind::LoadSucceeded { .. }
                        | EngineEventKind::AnimationCompleted
                        | EngineEventKind::QuizCompleted
                ) {
                    print_screen(&controller);
                }
            }
        }
    }

    info!("session ended");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
