//! Random number sources.
//!
//! Every stochastic step of the search draws from a [`RandomSource`], whose
//! single capability is "a uniform integer in `[0, bound)`". Any
//! [`rand::Rng`] is a source, so seeded generators plug in directly;
//! [`ScriptedSource`] replays a fixed sequence for deterministic tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces uniform integers in `[0, bound)`.
pub trait RandomSource {
    /// Returns a uniform integer in `[0, bound)`.
    ///
    /// Callers guarantee `bound > 0`.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Creates a reproducible generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, so every draw stays in
/// range no matter which bound the caller asks for. An empty script always
/// yields 0.
///
/// ```
/// use u_timetable::random::{RandomSource, ScriptedSource};
///
/// let mut src = ScriptedSource::new([4, 1, 7]);
/// assert_eq!(src.below(5), 4);
/// assert_eq!(src.below(5), 1);
/// assert_eq!(src.below(5), 2);
/// assert_eq!(src.below(5), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
