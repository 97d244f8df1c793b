//! TUI Pac-Man (workspace facade crate).
//!
//! Re-exports the member crates as `tui_pacman::{types, core, input, engine, term}`
//! so binaries, tests, and benches depend on one package.

pub use tui_pacman_core as core;
pub use tui_pacman_engine as engine;
pub use tui_pacman_input as input;
pub use tui_pacman_term as term;
pub use tui_pacman_types as types;
