//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid, movement, ghost and scoring rules.
//! It has **no dependencies** on terminals, threads, or clocks, making it:
//!
//! - **Deterministic**: ghosts draw from an injected [`GhostBrain`]
//! - **Testable**: every tick phase is a plain method on [`Session`]
//! - **Portable**: can run headless, in benches, or behind any renderer
//!
//! # Module Structure
//!
//! - [`grid`]: rectangular tile map, map parsing, dot consumption
//! - [`motion`]: wraparound and wall-revert movement for every actor
//! - [`ghost`]: uniform random-walk direction sources
//! - [`session`]: score, lives, actors, and end-of-game detection
//!
//! # Game Rules
//!
//! - **Walls** reject a move entirely; the actor stays where it was
//! - **Edges** wrap: leaving one side enters the opposite side
//! - **Dots** score one point each and are eaten exactly once
//! - **Ghosts** move every tick in a random direction
//! - **Collisions** cost a life per ghost and send the player back to spawn
//! - The game is **lost** at zero lives and **won** when no dots remain
//!
//! # Example
//!
//! ```
//! use tui_pacman_core::Session;
//! use tui_pacman_types::{Direction, InputEvent, Status};
//!
//! let mut session = Session::from_map("#####\n#P. #\n#####").unwrap();
//! session.apply_input(Some(InputEvent::Move(Direction::Right)));
//!
//! assert_eq!(session.score(), 1);
//! assert_eq!(session.check_end(), Status::Won);
//! ```

pub mod ghost;
pub mod grid;
pub mod motion;
pub mod session;

pub use tui_pacman_types as types;

// Re-export commonly used types for convenience
pub use ghost::{GhostBrain, RandomWalk, SimpleRng};
pub use grid::{Grid, Level, MapError};
pub use motion::{resolve, resolve_opt};
pub use session::{Actor, InputOutcome, Session};
