//! Fixed-tick game loop.
//!
//! Each tick renders, applies at most one pending key, moves the ghosts,
//! settles collisions, and checks for the end of the game. The loop only
//! ever sleeps between ticks and during the death pause; it never waits on
//! the keyboard.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::{GhostBrain, Session};
use crate::input::KeyStream;
use crate::types::{Position, Status, DEATH_PAUSE_MS, TICK_MS};

/// Sink for frames. Implemented by the terminal screen, and by recorders in tests.
pub trait Renderer {
    /// Draw the grid, the actors, and the score/lives line.
    fn render(&mut self, session: &Session) -> Result<()>;

    /// Mark the cell where the player was caught.
    fn render_death(&mut self, session: &Session, at: Position) -> Result<()>;
}

/// Loop pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub tick: Duration,
    pub death_pause: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS as u64),
            death_pause: Duration::from_millis(DEATH_PAUSE_MS as u64),
        }
    }
}

impl LoopConfig {
    /// No sleeping at all (headless runs and tests).
    pub fn immediate() -> Self {
        Self {
            tick: Duration::ZERO,
            death_pause: Duration::ZERO,
        }
    }
}

/// Final result of [`GameLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub score: u32,
    pub lives: u32,
    pub ticks: u64,
}

pub struct GameLoop<B> {
    session: Session,
    brain: B,
    keys: KeyStream,
    config: LoopConfig,
    ticks: u64,
}

impl<B: GhostBrain> GameLoop<B> {
    pub fn new(session: Session, brain: B, keys: KeyStream, config: LoopConfig) -> Self {
        Self {
            session,
            brain,
            keys,
            config,
            ticks: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick and return the status it ended in.
    ///
    /// Sleeps for the tick interval afterwards unless the game just ended.
    /// Calling this on a finished game does nothing.
    pub fn tick(&mut self, renderer: &mut impl Renderer) -> Result<Status> {
        if self.session.is_over() {
            return Ok(self.session.status());
        }
        self.ticks += 1;

        renderer
            .render(&self.session)
            .context("failed to render frame")?;

        let input = self.keys.try_next();
        let outcome = self.session.apply_input(input);
        if outcome.quit {
            info!(tick = self.ticks, "quit requested");
        } else if outcome.moved {
            debug!(tick = self.ticks, ate_dot = outcome.ate_dot, "player moved");
        }

        self.session.move_ghosts(&mut self.brain);

        let caught_at = self.session.player().pos;
        for ghost in self.session.collisions() {
            debug!(tick = self.ticks, ghost, "ghost collision");
            if self.session.register_hit() {
                renderer
                    .render_death(&self.session, caught_at)
                    .context("failed to render death")?;
                pause(self.config.death_pause);
                self.session.respawn_player();
            }
        }

        let status = self.session.check_end();
        debug!(
            tick = self.ticks,
            score = self.session.score(),
            lives = self.session.lives(),
            dots = self.session.dots_remaining(),
            ?status,
            "tick"
        );

        match status {
            Status::Running => pause(self.config.tick),
            Status::GameOver => {
                let at = self.session.player().pos;
                renderer
                    .render(&self.session)
                    .and_then(|_| renderer.render_death(&self.session, at))
                    .context("failed to render game over")?;
            }
            Status::Won => {
                renderer
                    .render(&self.session)
                    .context("failed to render final frame")?;
            }
        }
        Ok(status)
    }

    /// Tick until the game is won or lost.
    pub fn run(&mut self, renderer: &mut impl Renderer) -> Result<Outcome> {
        info!(
            rows = self.session.grid().rows(),
            cols = self.session.grid().cols(),
            ghosts = self.session.ghosts().len(),
            dots = self.session.dots_remaining(),
            "game started"
        );
        while !self.tick(renderer)?.is_terminal() {}

        let outcome = self.outcome();
        info!(?outcome, "game finished");
        Ok(outcome)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            status: self.session.status(),
            score: self.session.score(),
            lives: self.session.lives(),
            ticks: self.ticks,
        }
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}

fn pause(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, InputEvent};
    use std::time::Instant;

    #[derive(Default)]
    struct Recorder {
        frames: usize,
        deaths: Vec<Position>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, _session: &Session) -> Result<()> {
            self.frames += 1;
            Ok(())
        }

        fn render_death(&mut self, _session: &Session, at: Position) -> Result<()> {
            self.deaths.push(at);
            Ok(())
        }
    }

    struct Broken;

    impl Renderer for Broken {
        fn render(&mut self, _session: &Session) -> Result<()> {
            anyhow::bail!("terminal gone")
        }

        fn render_death(&mut self, _session: &Session, _at: Position) -> Result<()> {
            Ok(())
        }
    }

    fn game(map: &str) -> (crate::input::KeySender, GameLoop<impl GhostBrain>) {
        let (tx, keys) = KeyStream::channel();
        let session = Session::from_map(map).unwrap();
        let lp = GameLoop::new(session, || Direction::Up, keys, LoopConfig::immediate());
        (tx, lp)
    }

    #[test]
    fn test_one_input_per_tick() {
        let (tx, mut lp) = game("P   .");
        for _ in 0..3 {
            tx.send(InputEvent::Move(Direction::Right)).unwrap();
        }
        let mut r = Recorder::default();

        lp.tick(&mut r).unwrap();
        assert_eq!(lp.session().player().pos, Position::new(0, 1));
        lp.tick(&mut r).unwrap();
        assert_eq!(lp.session().player().pos, Position::new(0, 2));
        lp.tick(&mut r).unwrap();
        assert_eq!(lp.session().player().pos, Position::new(0, 3));
        // Queue drained: the player stays.
        lp.tick(&mut r).unwrap();
        assert_eq!(lp.session().player().pos, Position::new(0, 3));
        assert_eq!(r.frames, 4);
    }

    #[test]
    fn test_tick_without_input_does_not_block() {
        let (tx, mut lp) = game("P .");
        let mut r = Recorder::default();
        let start = Instant::now();
        assert_eq!(lp.tick(&mut r).unwrap(), Status::Running);
        assert!(start.elapsed() < Duration::from_secs(1));
        drop(tx);
        assert_eq!(lp.tick(&mut r).unwrap(), Status::Running);
    }

    #[test]
    fn test_escape_renders_death_once_and_stops() {
        let (tx, mut lp) = game("P .");
        tx.send(InputEvent::Esc).unwrap();
        let mut r = Recorder::default();
        let outcome = lp.run(&mut r).unwrap();
        assert_eq!(outcome.status, Status::GameOver);
        assert_eq!(outcome.ticks, 1);
        assert_eq!(r.deaths, vec![Position::new(0, 0)]);

        // Finished games ignore further ticks.
        assert_eq!(lp.tick(&mut r).unwrap(), Status::GameOver);
        assert_eq!(lp.ticks(), 1);
    }

    #[test]
    fn test_render_error_propagates() {
        let (_tx, mut lp) = game("P .");
        let err = lp.tick(&mut Broken).unwrap_err();
        assert!(format!("{:#}", err).contains("terminal gone"));
    }

    #[test]
    fn test_default_pacing() {
        let cfg = LoopConfig::default();
        assert_eq!(cfg.tick, Duration::from_millis(200));
        assert_eq!(cfg.death_pause, Duration::from_millis(1000));
    }
}
