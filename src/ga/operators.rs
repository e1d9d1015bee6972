//! Genetic operators for queen placements.
//!
//! Both operators keep every gene inside `[0, n)`, so their outputs always
//! satisfy the [`Chromosome`] invariant.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point crossover at a random interior cut
//! - [`crossover_at`]: the same splice at a caller-chosen cut
//!
//! # Mutation
//!
//! - [`mutate`]: per-gene random reset, fitness recomputed once
//! - [`mutate_genes`]: the raw gene pass, reporting how many genes were redrawn

use super::types::Chromosome;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut point with [`cut_point`] and splices the parents there.
/// The two extreme positions are never used, so each child carries
/// material from both parents.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let point = cut_point(parent1.board_size(), rng);
    crossover_at(parent1, parent2, point)
}

/// Splices two parents at `point`.
///
/// ```text
/// child1 = parent1[..point] ++ parent2[point..]
/// child2 = parent2[..point] ++ parent1[point..]
/// ```
///
/// # Panics
/// Panics if the parents have different lengths or `point > n`.
pub fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    point: usize,
) -> (Chromosome, Chromosome) {
    let (g1, g2) = (parent1.genes(), parent2.genes());
    assert_eq!(g1.len(), g2.len(), "parents must have equal length");
    assert!(point <= g1.len(), "cut point {point} past end of chromosome");

    let child1 = [&g1[..point], &g2[point..]].concat();
    let child2 = [&g2[..point], &g1[point..]].concat();

    (Chromosome::from_genes(child1), Chromosome::from_genes(child2))
}

/// Draws a cut point uniformly from `[1, n - 2]`.
///
/// For `n <= 3` that range holds at most one value; `1` is returned,
/// which for `n == 2` is the only cut that mixes both parents.
pub fn cut_point<R: Rng>(n: usize, rng: &mut R) -> usize {
    let hi = n.saturating_sub(2).max(1);
    rng.random_range(1..=hi)
}

// ============================================================================
// Mutation
// ============================================================================

/// Random-reset mutation.
///
/// Visits every gene; with probability `rate` the gene is redrawn
/// uniformly from `[0, n)`. The fitness of the returned chromosome is
/// computed once, after the whole pass.
///
/// # Panics
/// Panics if `rate` lies outside `[0, 1]`.
pub fn mutate<R: Rng>(chromosome: &Chromosome, rate: f64, rng: &mut R) -> Chromosome {
    let mut genes = chromosome.genes().to_vec();
    mutate_genes(&mut genes, rate, rng);
    Chromosome::from_genes(genes)
}

/// Applies random-reset mutation to raw genes in place.
///
/// Returns the number of genes redrawn. A redraw that lands on the old
/// value still counts.
///
/// # Panics
/// Panics if `rate` lies outside `[0, 1]`.
pub fn mutate_genes<R: Rng>(genes: &mut [usize], rate: f64, rng: &mut R) -> usize {
    let n = genes.len();
    let mut redrawn = 0;
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = rng.random_range(0..n);
            redrawn += 1;
        }
    }
    redrawn
}

// ============================================================================
// Tests
// ============================================================================
