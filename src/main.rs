use std::fs::File;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use grid_snake::clock::FrameClock;
use grid_snake::config::GRID_CELLS;
use grid_snake::error::GameError;
use grid_snake::game::GameState;
use grid_snake::grid::Grid;
use grid_snake::session::{SessionSummary, run_session};
use grid_snake::terminal::{TerminalPresenter, cleanup_terminal_best_effort};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for item placement, for a reproducible sequence of items.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by `RUST_LOG`, default `info`).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    install_panic_hook();

    let summary = run(&cli)?;
    if summary.rounds_finished > 0 {
        println!(
            "Rounds played: {}, best score: {}",
            summary.rounds_finished, summary.best_score
        );
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<SessionSummary, GameError> {
    let grid = Grid::new(GRID_CELLS);
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(grid, seed)?,
        None => GameState::new(grid)?,
    };

    let mut presenter = TerminalPresenter::new()?;
    let mut clock = FrameClock::standard();
    run_session(&mut presenter, &mut state, &mut clock)
}

fn init_logging(path: Option<&Path>) -> Result<(), GameError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| GameError::LogFile {
        path: path.display().to_string(),
        source,
    })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort(true);
        default_hook(panic_info);
    }));
}
