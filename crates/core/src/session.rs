//! Session state - everything one game mutates
//!
//! Replaces free-standing globals with a single owner: the grid, the actors,
//! the score and life counters, and the lifecycle [`Status`]. The tick phases
//! are exposed as separate operations so the game loop can interleave
//! rendering and pauses between them.

use tracing::debug;

use crate::ghost::GhostBrain;
use crate::grid::{Grid, Level, MapError};
use crate::motion::resolve;
use crate::types::{InputEvent, Position, Status, DEFAULT_LIVES};

/// A moving piece: current cell plus the cell it respawns on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub pos: Position,
    origin: Position,
}

impl Actor {
    pub fn new(origin: Position) -> Self {
        Self {
            pos: origin,
            origin,
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn respawn(&mut self) {
        self.pos = self.origin;
    }
}

/// What the input phase did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    pub moved: bool,
    pub ate_dot: bool,
    pub quit: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    player: Actor,
    ghosts: Vec<Actor>,
    score: u32,
    lives: u32,
    status: Status,
}

impl Session {
    pub fn new(grid: Grid, player: Position, ghosts: &[Position], lives: u32) -> Self {
        Self {
            grid,
            player: Actor::new(player),
            ghosts: ghosts.iter().copied().map(Actor::new).collect(),
            score: 0,
            lives,
            status: Status::Running,
        }
    }

    pub fn from_level(level: Level, lives: u32) -> Self {
        Self::new(level.grid, level.player, &level.ghosts, lives)
    }

    /// Parse map text and start a session with [`DEFAULT_LIVES`].
    pub fn from_map(text: &str) -> Result<Self, MapError> {
        Ok(Self::from_level(Level::parse(text)?, DEFAULT_LIVES))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    pub fn ghosts(&self) -> &[Actor] {
        &self.ghosts
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn dots_remaining(&self) -> usize {
        self.grid.dots_remaining()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Input phase: apply at most one decoded event.
    ///
    /// `Esc` drops lives to zero; the loss is picked up by [`Session::check_end`]
    /// like any other. A move onto a dot eats it and scores one point.
    pub fn apply_input(&mut self, input: Option<InputEvent>) -> InputOutcome {
        let mut outcome = InputOutcome::default();
        match input {
            None => {}
            Some(InputEvent::Esc) => {
                self.lives = 0;
                outcome.quit = true;
            }
            Some(InputEvent::Move(dir)) => {
                let from = self.player.pos;
                let to = resolve(from, dir, &self.grid);
                self.player.pos = to;
                outcome.moved = to != from;
                if self.grid.consume_dot(to.row, to.col) {
                    self.score += 1;
                    outcome.ate_dot = true;
                }
            }
        }
        outcome
    }

    /// Ghost phase: every ghost draws a direction and moves, every tick.
    pub fn move_ghosts(&mut self, brain: &mut impl GhostBrain) {
        for ghost in &mut self.ghosts {
            let dir = brain.next_direction();
            ghost.pos = resolve(ghost.pos, dir, &self.grid);
        }
    }

    /// Ghosts standing on the player's current cell.
    ///
    /// Call once at the start of the collision phase; each returned ghost
    /// costs a life even if several arrive together.
    pub fn collisions(&self) -> Vec<usize> {
        self.ghosts
            .iter()
            .enumerate()
            .filter(|(_, g)| g.pos == self.player.pos)
            .map(|(i, _)| i)
            .collect()
    }

    /// Take one life for a ghost hit. Returns true while lives remain.
    pub fn register_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        debug!(lives = self.lives, "player caught");
        self.lives > 0
    }

    pub fn respawn_player(&mut self) {
        self.player.respawn();
    }

    /// End-of-tick check. Running out of lives takes precedence over eating
    /// the last dot.
    pub fn check_end(&mut self) -> Status {
        if self.status == Status::Running {
            if self.lives == 0 {
                self.status = Status::GameOver;
            } else if self.grid.dots_remaining() == 0 {
                self.status = Status::Won;
            }
        }
        self.status
    }

    /// Move a ghost directly, bypassing the resolver (for testing)
    #[cfg(test)]
    pub fn ghost_mut(&mut self, index: usize) -> &mut Actor {
        &mut self.ghosts[index]
    }
}
