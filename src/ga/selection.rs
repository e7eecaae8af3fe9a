//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use crate::random::RandomSource;

/// Tournament selection: draw `k` individuals uniformly **with replacement**
/// and return the index of the fittest.
///
/// Comparison is a strict `>` (maximization), so among equally fit
/// contestants the one drawn first wins. Exactly `k` random draws are made.
/// A `k` of 0 is treated as 1.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Individual, R: RandomSource>(
    population: &[I],
    k: usize,
    rng: &mut R,
) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let mut best_idx = rng.below(n);
    for _ in 1..k.max(1) {
        let idx = rng.below(n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
