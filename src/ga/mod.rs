//! Genetic Algorithm for N-queens.
//!
//! A population of queen placements evolves under tournament selection,
//! single-point crossover, and per-gene random-reset mutation until a
//! placement with no attacking pair appears or the generation budget runs
//! out.
//!
//! # Key Types
//!
//! - [`Chromosome`]: One queen per column, with its fitness
//! - [`GaConfig`]: Algorithm parameters (board size, population size, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with termination reason and statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and random-reset mutation
//! - [`population`]: Random initialization
//! - [`selection`]: Tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Crawford (1992), "Solving the N-Queens Problem Using Genetic Algorithms"

mod config;
pub mod operators;
pub mod population;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats, Termination};
pub use types::{evaluate, max_fitness, Chromosome};
