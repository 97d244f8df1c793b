//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input decoding).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs on the tile grid:
//!
//! - **row**: 0 is the top line of the map file
//! - **col**: 0 is the leftmost character of a line
//!
//! Both are kept inside `[0, rows) x [0, cols)` by the motion resolver.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Fixed interval between simulation ticks |
//! | `DEATH_PAUSE_MS` | 1000 | Pause after the player is caught |
//!
//! # Examples
//!
//! ```
//! use tui_pacman_types::{Direction, Position, Tile};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir.delta(), (0, -1));
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! assert_eq!(Tile::from_char('#'), Tile::Wall);
//! assert_eq!(Position::new(1, 2).row, 1);
//! ```

/// Fixed simulation tick interval (200ms)
pub const TICK_MS: u32 = 200;

/// Pause after a player-ghost collision (1000ms)
pub const DEATH_PAUSE_MS: u32 = 1000;

/// Lives at the start of a session
pub const DEFAULT_LIVES: u32 = 3;

/// Map marker for walls
pub const WALL_CHAR: char = '#';

/// Map marker for dots
pub const DOT_CHAR: char = '.';

/// Map marker for the player spawn
pub const PLAYER_CHAR: char = 'P';

/// Map marker for a ghost spawn (repeatable)
pub const GHOST_CHAR: char = 'G';


/// The four movement directions
///
/// A closed set: input that does not decode to one of these leaves the
/// player in place for that tick, and ghosts only ever draw from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the random walk indexes them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Unit step as `(d_row, d_col)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Contents of a single grid cell
///
/// Spawn markers are not tiles: the loader records them as actor origins
/// and leaves open floor behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    Wall,
    Dot,
    #[default]
    Empty,
}

impl Tile {
    pub fn from_char(ch: char) -> Self {
        match ch {
            WALL_CHAR => Tile::Wall,
            DOT_CHAR => Tile::Dot,
            _ => Tile::Empty,
        }
    }
}

/// A decoded keyboard event delivered to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    /// Quit request; the loop treats it as losing all lives.
    Esc,
}

impl InputEvent {
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::Move(dir) => Some(dir),
            InputEvent::Esc => None,
        }
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Running,
    /// Lives reached zero.
    GameOver,
    /// Every dot was eaten.
    Won,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Running)
    }
}
