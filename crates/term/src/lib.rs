//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is diffed and flushed to the
//! terminal, and owns the raw-mode lifetime of the process.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Exact cell-to-column mapping, including two-column emoji cells
//! - Restore the terminal on every exit path

pub mod fb;
pub mod game_view;
pub mod glyphs;
pub mod renderer;

pub use tui_pacman_core as core;
pub use tui_pacman_engine as engine;
pub use tui_pacman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use glyphs::{ConfigError, Glyphs};
pub use renderer::{encode_diff_into, encode_full_into, RawModeGuard, Screen, TerminalRenderer};
