//! Generic sequence recombination operators.
//!
//! These operate on fixed-length gene slices `&[T]` and are domain-agnostic:
//! any chromosome whose position identifies the gene (timeslot, locus,
//! decision variable) can use them.
//!
//! # Crossover Operators
//!
//! - [`segment_crossover`]: two-point crossover producing a single child —
//!   one contiguous segment from parent1 embedded in parent2
//!
//! # References
//!
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems" (multi-point crossover)

use crate::random::RandomSource;

// ============================================================================
// Crossover operators
// ============================================================================

/// Two-point (segment) crossover producing one child.
///
/// # Algorithm
///
/// 1. Draw two independent positions in `0..n`; `start = min`, `end = max`
/// 2. Positions in `[start, end]` (inclusive) copy parent1's gene
/// 3. Every other position copies parent2's gene
///
/// When both draws coincide exactly one gene comes from parent1.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn segment_crossover<T: Clone, R: RandomSource>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (start, end) = random_segment(n, rng);
    splice_segment(parent1, parent2, start, end)
}

/// Builds a child from `donor[start..=end]` and `background` elsewhere.
///
/// # Panics
/// Panics if `end` is out of bounds or the slices differ in length.
pub fn splice_segment<T: Clone>(donor: &[T], background: &[T], start: usize, end: usize) -> Vec<T> {
    assert_eq!(donor.len(), background.len(), "parents must have equal length");
    assert!(start <= end && end < donor.len(), "segment out of bounds");

    let mut child = Vec::with_capacity(donor.len());
    child.extend_from_slice(&background[..start]);
    child.extend_from_slice(&donor[start..=end]);
    child.extend_from_slice(&background[end + 1..]);
    child
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
///
/// Makes exactly two draws from `rng`.
pub fn random_segment<R: RandomSource>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.below(n);
    let b = rng.below(n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
