//! Genetic-algorithm solver for the N-queens problem.
//!
//! Places N queens on an N×N board so that no two attack each other,
//! using population-based stochastic search instead of backtracking:
//!
//! - **Encoding**: one gene per column, holding the queen's row.
//! - **Fitness**: number of non-attacking queen pairs, at most `N(N-1)/2`.
//! - **Operators**: tournament selection, single-point crossover,
//!   per-gene random-reset mutation.
//! - **Termination**: a perfect placement, or the generation budget.
//!
//! This is a heuristic. A run may end without a solution.
//!
//! # Example
//!
//! ```
//! use nqueens_ga::{genetic_algorithm, GaConfig};
//!
//! let result = genetic_algorithm(&GaConfig::default().with_seed(7)).unwrap();
//! println!("{:?} (fitness {})", result.best.genes(), result.best_fitness);
//! ```
//!
//! # Features
//!
//! - `parallel`: mutate and evaluate children on rayon's thread pool.
//! - `serde`: `Serialize`/`Deserialize` for configuration and results.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{ConfigError, GenomeError};
pub use ga::{Chromosome, GaConfig, GaResult, GaRunner, Termination};

/// Runs the genetic algorithm with the given configuration.
///
/// Shorthand for [`GaRunner::run`].
///
/// # Errors
/// Returns [`ConfigError`] if the configuration is invalid.
pub fn genetic_algorithm(config: &GaConfig) -> Result<GaResult, ConfigError> {
    GaRunner::run(config)
}
