//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → replacement → repeat.
//!
//! Two retained policies shape the loop:
//!
//! - Replacement carries over the first half of the previous population
//!   *by position*, not by fitness, and fills the rest with children in
//!   the order they were produced.
//! - The reported best is the best of the last evaluated generation. There
//!   is no best-ever memory, so a later generation may report a worse best
//!   than an earlier one.

use super::config::GaConfig;
use super::operators::{crossover, mutate};
use super::population::{fittest, initial_population};
use super::selection::select_mating_pool;
use super::types::{max_fitness, Chromosome};
use crate::error::ConfigError;
use crate::random::{create_rng, derive_seed, entropy_seed};
use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A generation contained a placement with no attacking pair.
    Converged,
    /// The generation budget ran out first.
    Exhausted,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Fitness summary of one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best_fitness: usize,
    /// Mean fitness over the generation.
    pub mean_fitness: f64,
    /// Lowest fitness in the generation.
    pub worst_fitness: usize,
}

impl GenerationStats {
    fn of(generation: usize, population: &[Chromosome]) -> Self {
        let mut best = 0usize;
        let mut worst = usize::MAX;
        let mut total = 0usize;
        for c in population {
            best = best.max(c.fitness());
            worst = worst.min(c.fitness());
            total += c.fitness();
        }
        Self {
            generation,
            best_fitness: best,
            mean_fitness: total as f64 / population.len() as f64,
            worst_fitness: worst,
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best chromosome of the final evaluated generation.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: usize,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Fitness summary of each evaluated generation, in order.
    pub history: Vec<GenerationStats>,
}

impl GaResult {
    /// Whether the run found a placement with no attacking pair.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use nqueens_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert_eq!(result.best.board_size(), 8);
/// assert!(result.generations <= 100);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA from a random initial population.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn run(config: &GaConfig) -> Result<GaResult, ConfigError> {
        Self::run_with_cancel(config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop before the next generation and return the best chromosome of
    /// the last evaluated generation (or of the initial population if no
    /// generation ran).
    pub fn run_with_cancel(
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, ConfigError> {
        check(config)?;
        let mut rng = master_rng(config);
        let population =
            initial_population(config.population_size, config.board_size, &mut rng);
        Ok(evolve(config, population, &mut rng, cancel.as_deref()))
    }

    /// Runs the GA from a caller-supplied initial population.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid, if the
    /// population does not hold exactly `population_size` members, or if
    /// any member was built for a board other than `board_size`.
    pub fn run_with_population(
        config: &GaConfig,
        population: Vec<Chromosome>,
    ) -> Result<GaResult, ConfigError> {
        check(config)?;
        if population.len() != config.population_size {
            return Err(ConfigError::PopulationSizeMismatch {
                expected: config.population_size,
                actual: population.len(),
            });
        }
        if let Some((index, c)) = population
            .iter()
            .enumerate()
            .find(|(_, c)| c.board_size() != config.board_size)
        {
            return Err(ConfigError::BoardSizeMismatch {
                index,
                expected: config.board_size,
                actual: c.board_size(),
            });
        }
        let mut rng = master_rng(config);
        Ok(evolve(config, population, &mut rng, None))
    }
}

fn check(config: &GaConfig) -> Result<(), ConfigError> {
    config.validate().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected GA configuration");
    })
}

fn master_rng(config: &GaConfig) -> StdRng {
    let seed = config.seed.unwrap_or_else(entropy_seed);
    tracing::debug!(seed, "seeding GA");
    create_rng(seed)
}

/// Runs generations until convergence, budget exhaustion, or cancellation.
fn evolve(
    config: &GaConfig,
    mut population: Vec<Chromosome>,
    rng: &mut StdRng,
    cancel: Option<&AtomicBool>,
) -> GaResult {
    let target = max_fitness(config.board_size);
    // The budget is an upper bound only; runs usually converge far earlier.
    let mut history = Vec::new();
    let mut best: Option<Chromosome> = None;
    let mut termination = Termination::Exhausted;

    if config.parallel && !cfg!(feature = "parallel") {
        tracing::debug!("parallel requested without the `parallel` feature; mutating sequentially");
    }

    for gen in 0..config.generations {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            termination = Termination::Cancelled;
            break;
        }

        let children = breed(config, &population, rng);
        population = next_generation(population, children, config.population_size);

        let stats = GenerationStats::of(gen + 1, &population);
        tracing::debug!(
            generation = stats.generation,
            best = stats.best_fitness,
            mean = stats.mean_fitness,
            "generation evaluated"
        );
        history.push(stats);

        let gen_best = fittest(&population)
            .expect("population is never empty")
            .clone();
        let solved = gen_best.fitness() == target;
        best = Some(gen_best);
        if solved {
            termination = Termination::Converged;
            break;
        }
    }

    let best = match best {
        Some(best) => best,
        None => fittest(&population)
            .expect("population is never empty")
            .clone(),
    };

    tracing::info!(
        ?termination,
        generations = history.len(),
        best_fitness = best.fitness(),
        target,
        "GA finished"
    );

    GaResult {
        best_fitness: best.fitness(),
        best,
        generations: history.len(),
        termination,
        history,
    }
}

/// Produces one generation's children: selection, crossover, mutation.
///
/// Consecutive mating-pool members are paired and each pair yields two
/// children. When the pool is odd, the leftover member is paired with a
/// random member of `population` rather than of the pool.
fn breed(config: &GaConfig, population: &[Chromosome], rng: &mut StdRng) -> Vec<Chromosome> {
    let pool = select_mating_pool(population, config.tournament_size, rng);

    let mut children = Vec::with_capacity(pool.len() + 1);
    for pair in pool.chunks(2) {
        let (c1, c2) = match *pair {
            [p1, p2] => crossover(p1, p2, rng),
            [p1] => {
                let mate = &population[rng.random_range(0..population.len())];
                crossover(p1, mate, rng)
            }
            _ => unreachable!("chunks(2) yields one or two members"),
        };
        children.push(c1);
        children.push(c2);
    }

    // One seed per child, drawn in order, so mutation results do not
    // depend on how the children are scheduled.
    let jobs: Vec<(Chromosome, u64)> = children
        .into_iter()
        .map(|child| {
            let seed = derive_seed(rng);
            (child, seed)
        })
        .collect();
    mutate_all(jobs, config.mutation_rate, config.parallel)
}

fn mutate_with_seed(child: &Chromosome, rate: f64, seed: u64) -> Chromosome {
    mutate(child, rate, &mut create_rng(seed))
}

#[cfg(feature = "parallel")]
fn mutate_all(jobs: Vec<(Chromosome, u64)>, rate: f64, parallel: bool) -> Vec<Chromosome> {
    if parallel {
        jobs.into_par_iter()
            .map(|(child, seed)| mutate_with_seed(&child, rate, seed))
            .collect()
    } else {
        jobs.into_iter()
            .map(|(child, seed)| mutate_with_seed(&child, rate, seed))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn mutate_all(jobs: Vec<(Chromosome, u64)>, rate: f64, _parallel: bool) -> Vec<Chromosome> {
    jobs.into_iter()
        .map(|(child, seed)| mutate_with_seed(&child, rate, seed))
        .collect()
}

/// Builds the next population: the first `size / 2` members of `previous`
/// by position, then children in production order up to `size`.
fn next_generation(
    previous: Vec<Chromosome>,
    children: Vec<Chromosome>,
    size: usize,
) -> Vec<Chromosome> {
    let carried = size / 2;
    previous
        .into_iter()
        .take(carried)
        .chain(children.into_iter().take(size - carried))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
