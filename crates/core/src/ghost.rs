//! Ghost module - random-walk direction sources
//!
//! Ghosts have no targeting: every tick each ghost draws one of the four
//! directions uniformly, independent of the other ghosts and of its previous
//! move. Walls are handled by the same resolver the player uses.
//!
//! Also provides a simple LCG for deterministic testing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Direction;

/// Source of ghost directions, one draw per ghost per tick.
pub trait GhostBrain {
    fn next_direction(&mut self) -> Direction;
}

/// Scripted brains for tests and replays.
impl<F> GhostBrain for F
where
    F: FnMut() -> Direction,
{
    fn next_direction(&mut self) -> Direction {
        self()
    }
}

/// Uniform random walk backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomWalk<R = StdRng> {
    rng: R,
}

impl RandomWalk<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible walk for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomWalk<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> GhostBrain for RandomWalk<R> {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits: the low bits of a power-of-two LCG cycle with short periods.
        (self.next_u32() >> 16) % max
    }
}

impl GhostBrain for SimpleRng {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.next_range(Direction::ALL.len() as u32) as usize]
    }
}
