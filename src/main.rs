//! Terminal Pac-Man runner (default binary).
//!
//! Loads the maze and glyph config, switches the terminal to raw mode, and
//! runs the fixed-tick loop until the player wins, loses, or presses Escape.
//! Keyboard bytes are read on a background thread straight from stdin.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_pacman::core::{Level, RandomWalk, Session};
use tui_pacman::engine::{GameLoop, LoopConfig};
use tui_pacman::input::spawn_reader;
use tui_pacman::term::{GameView, Glyphs, RawModeGuard, Screen};
use tui_pacman::types::{Status, DEFAULT_LIVES};

const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Log filter used when RUST_LOG is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Glyph configuration (JSON) [default: config.json, built-in glyphs if absent]
    #[arg(long)]
    config_file: Option<PathBuf>,
    /// Maze text file
    #[arg(long, default_value = "maze01.txt")]
    maze_file: PathBuf,
    /// Write logs here (filtered by RUST_LOG, default warn); no logging otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Fail before touching the terminal.
    let level = Level::load(&cli.maze_file)
        .with_context(|| format!("cannot start without a maze ({})", cli.maze_file.display()))?;
    let glyphs = load_glyphs(cli.config_file.as_deref())?;
    let session = Session::from_level(level, DEFAULT_LIVES);
    info!(maze = %cli.maze_file.display(), emoji = glyphs.use_emoji, "loaded");

    let mut guard = RawModeGuard::acquire().context("failed to enable raw mode")?;
    let result = play(session, glyphs);
    // Always try to restore terminal state.
    guard.release().context("failed to restore terminal")?;

    let outcome = result?;
    match outcome.status {
        Status::Won => println!("You win! Score: {}", outcome.score),
        _ => println!("Game over! Score: {}", outcome.score),
    }
    Ok(())
}

fn play(session: Session, glyphs: Glyphs) -> Result<tui_pacman::engine::Outcome> {
    let keys = spawn_reader(io::stdin()).context("failed to start input thread")?;
    let mut screen = Screen::new(GameView::new(glyphs));
    let mut game = GameLoop::new(
        session,
        RandomWalk::from_entropy(),
        keys,
        LoopConfig::default(),
    );
    game.run(&mut screen)
}

fn load_glyphs(path: Option<&Path>) -> Result<Glyphs> {
    match path {
        Some(path) => Ok(Glyphs::load(path)?),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => Ok(Glyphs::load(DEFAULT_CONFIG_FILE)?),
        None => Ok(Glyphs::default()),
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
