//! Random index selection for lifelines
//!
//! The 50/50 lifeline needs one uniform choice per use. The source is behind a
//! trait so the server can run with thread randomness, a fixed seed, or a
//! scripted sequence in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniform index choices
pub trait RandomSource: Send {
    /// Uniform value in `0..upper`. `upper` must be non-zero.
    fn pick(&mut self, upper: usize) -> usize;
}

/// Thread-local OS-seeded randomness
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}

/// Reproducible randomness from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, upper: usize) -> usize {
        self.inner.random_range(0..upper)
    }
}

/// Replays a fixed sequence of choices, wrapping each into `0..upper`.
/// Once exhausted it keeps returning 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, upper: usize) -> usize {
        self.script.pop_front().unwrap_or(0) % upper
    }
}
