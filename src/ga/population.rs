//! Population initialization.

use super::types::Chromosome;
use rand::Rng;

/// Creates `population_size` random chromosomes for an `n`×`n` board.
///
/// Every gene is drawn independently and uniformly from `[0, n)`, so row
/// and diagonal collisions are expected in the starting generation.
///
/// # Panics
/// Panics if `n` is zero.
pub fn initial_population<R: Rng>(
    population_size: usize,
    n: usize,
    rng: &mut R,
) -> Vec<Chromosome> {
    assert!(n > 0, "board size must be positive");
    (0..population_size)
        .map(|_| random_chromosome(n, rng))
        .collect()
}

/// Creates one chromosome with uniformly random genes.
pub fn random_chromosome<R: Rng>(n: usize, rng: &mut R) -> Chromosome {
    let genes: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
    Chromosome::from_genes(genes)
}

/// Finds the fittest member; the first one wins ties.
///
/// Returns `None` for an empty population.
pub fn fittest(population: &[Chromosome]) -> Option<&Chromosome> {
    population.iter().fold(None, |best, c| match best {
        Some(b) if b.fitness() >= c.fitness() => Some(b),
        _ => Some(c),
    })
}
