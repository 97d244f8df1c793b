//! Input diagnostic: prints every decoded key until Escape or Ctrl-C.
//!
//! Useful for checking that a terminal sends plain `ESC [ A..D` arrow
//! sequences in raw mode.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::terminal;

use tui_pacman::input::spawn_reader;
use tui_pacman::types::InputEvent;

fn main() -> Result<()> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let result = run();
    // Always try to restore terminal state.
    let restored = terminal::disable_raw_mode().context("failed to disable raw mode");
    result.and(restored)
}

fn run() -> Result<()> {
    let mut out = io::stdout();
    write!(out, "Press arrow keys; Escape to quit.\r\n")?;
    out.flush()?;

    let mut keys = spawn_reader(io::stdin())?;
    loop {
        match keys.try_next() {
            Some(InputEvent::Esc) => {
                write!(out, "escape\r\n")?;
                break;
            }
            Some(InputEvent::Move(dir)) => write!(out, "{}\r\n", dir.as_str())?,
            None if keys.reader_finished() => break,
            None => thread::sleep(Duration::from_millis(10)),
        }
        out.flush()?;
    }
    out.flush()?;
    Ok(())
}
