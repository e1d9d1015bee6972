//! Tournament selection.
//!
//! Selection builds the mating pool for one generation. Each slot of the
//! pool is filled by an independent tournament, so a strong member can win
//! several slots.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Chromosome;
use rand::seq::index;
use rand::Rng;

/// Builds a mating pool the size of the population.
///
/// Slot `i` holds the winner of the `i`-th tournament.
///
/// # Panics
/// Panics if `tournament_size` is zero or larger than the population.
pub fn select_mating_pool<'a, R: Rng>(
    population: &'a [Chromosome],
    tournament_size: usize,
    rng: &mut R,
) -> Vec<&'a Chromosome> {
    (0..population.len())
        .map(|_| &population[tournament(population, tournament_size, rng)])
        .collect()
}

/// Runs one tournament and returns the winner's index.
///
/// Draws `k` distinct members uniformly at random (no member competes
/// twice in the same tournament) and keeps the fittest. Higher `k` means
/// stronger selection pressure; `k == population.len()` always returns the
/// fittest member of the whole population.
///
/// # Complexity
/// O(k) per tournament
///
/// # Panics
/// Panics if `k` is zero or larger than the population.
pub fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    assert!(k >= 1, "tournament size must be at least 1");
    assert!(
        k <= population.len(),
        "tournament size {k} exceeds population size {}",
        population.len()
    );
    winner(population, index::sample(rng, population.len(), k).iter())
}

/// Picks the winner among `candidates`, visited in the given order.
///
/// A challenger replaces the current leader only with strictly greater
/// fitness, so on ties the candidate drawn first wins.
///
/// # Panics
/// Panics if `candidates` is empty.
pub fn winner<I>(population: &[Chromosome], candidates: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    let mut candidates = candidates.into_iter();
    let mut best = candidates.next().expect("tournament needs a candidate");
    for idx in candidates {
        if population[idx].fitness() > population[best].fitness() {
            best = idx;
        }
    }
    best
}
