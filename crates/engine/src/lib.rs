//! Game engine - the tick-driven orchestrator
//!
//! Glues the pure rules in `core` to the outside world: keyboard events
//! arrive through an `input` [`KeyStream`](crate::input::KeyStream), frames
//! leave through a [`Renderer`], and the loop paces itself with a fixed sleep
//! between ticks.
//!
//! Per tick, in order:
//!
//! 1. Render the grid, actors, and HUD
//! 2. Take at most one pending input (`Esc` empties the life counter)
//! 3. Move every ghost one random step
//! 4. Charge a life per ghost on the player's cell, pause, respawn
//! 5. Stop on zero lives (loss) or zero dots (win), otherwise sleep

pub mod game_loop;

pub use tui_pacman_core as core;
pub use tui_pacman_input as input;
pub use tui_pacman_types as types;

pub use game_loop::{GameLoop, LoopConfig, Outcome, Renderer};
