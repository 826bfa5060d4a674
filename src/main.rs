//! Command-line driver.
//!
//! ```text
//! children-game [--pretty] [PATH]            solve the games in PATH (or stdin)
//! children-game [--pretty] --random SEED [COUNT]
//! ```
//!
//! Input is one or more `GameData` JSON documents; each result is written to
//! stdout as one JSON line, or indented with `--pretty`. Logs go to stderr,
//! filtered by `RUST_LOG` (default `children_game=info`).
//! `CHILDREN_GAME_STRATEGY` selects the circle representation (`auto`,
//! `linked` or `indexed`).

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::ExitCode;

use children_game::core::ParseStrategyError;
use children_game::{play_all, JsonSink, JsonSource, PlayError, RandomGameSource, Solver, SolverConfig, Strategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const STRATEGY_VAR: &str = "CHILDREN_GAME_STRATEGY";
const RANDOM_GAMES: u64 = 5;
const RANDOM_MAX_CHILDREN: i32 = 50;
const RANDOM_MAX_INTERVAL: i32 = 10;

/// Errors that end the driver with a failure exit code.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("usage: children-game [--pretty] [PATH] | children-game [--pretty] --random SEED [COUNT]")]
    Usage,

    #[error("CHILDREN_GAME_STRATEGY: {0}")]
    Strategy(#[from] ParseStrategyError),

    #[error("invalid {what} '{value}': {source}")]
    InvalidNumber {
        what: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Play(#[from] PlayError),
}

/// Where games come from.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
    Random { seed: u64, count: u64 },
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Command {
    input: Input,
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "children_game=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = parse_args(&args).and_then(|command| {
        let solver = solver_from_env()?;
        run(&command, &solver, io::stdout().lock())
    });

    match outcome {
        Ok(played) => {
            tracing::info!(played, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn solver_from_env() -> Result<Solver, CliError> {
    let strategy = match std::env::var(STRATEGY_VAR) {
        Ok(value) => value.parse::<Strategy>()?,
        Err(_) => Strategy::default(),
    };
    Ok(Solver::new(SolverConfig::new().with_strategy(strategy)))
}

fn parse_number(what: &'static str, value: &str) -> Result<u64, CliError> {
    value.parse().map_err(|source| CliError::InvalidNumber {
        what,
        value: value.to_string(),
        source,
    })
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let pretty = args.iter().any(|a| a == "--pretty");
    let rest: Vec<&str> = args.iter().map(String::as_str).filter(|a| *a != "--pretty").collect();

    let input = match rest.as_slice() {
        ["--random", seed] => Input::Random {
            seed: parse_number("seed", seed)?,
            count: RANDOM_GAMES,
        },
        ["--random", seed, count] => Input::Random {
            seed: parse_number("seed", seed)?,
            count: parse_number("count", count)?,
        },
        [path] if !path.starts_with('-') => Input::File(PathBuf::from(path)),
        [] => Input::Stdin,
        _ => return Err(CliError::Usage),
    };

    Ok(Command { input, pretty })
}

fn run<W: Write>(command: &Command, solver: &Solver, out: W) -> Result<usize, CliError> {
    let mut sink = JsonSink::new(out);
    if command.pretty {
        sink = sink.pretty();
    }

    let played = match &command.input {
        Input::Random { seed, count } => {
            let mut source =
                RandomGameSource::new(*seed, RANDOM_MAX_CHILDREN, RANDOM_MAX_INTERVAL).with_limit(*count);
            play_all(&mut source, &mut sink, solver)?
        }
        Input::File(path) => {
            tracing::info!(path = %path.display(), "reading games");
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            let mut source = JsonSource::new(BufReader::new(file));
            play_all(&mut source, &mut sink, solver)?
        }
        Input::Stdin => {
            tracing::info!("reading games from stdin");
            let mut source = JsonSource::new(io::stdin().lock());
            play_all(&mut source, &mut sink, solver)?
        }
    };

    Ok(played)
}
