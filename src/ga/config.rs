//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the N-queens genetic algorithm.
///
/// Controls board size, population size, generation budget, operator
/// rates, and parallelism.
///
/// # Defaults
///
/// ```
/// use nqueens_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.board_size, 8);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.tournament_size, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_board_size(12)
///     .with_population_size(200)
///     .with_tournament_size(3)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GaConfig {
    /// Board size N: number of queens, rows, and columns.
    pub board_size: usize,

    /// Number of individuals in the population (K).
    ///
    /// The population keeps this size in every generation.
    pub population_size: usize,

    /// Generation budget (G).
    ///
    /// The run stops earlier when a perfect placement appears.
    pub generations: usize,

    /// Per-gene mutation probability (0.0–1.0).
    ///
    /// Each gene of every child is independently redrawn with this
    /// probability.
    pub mutation_rate: f64,

    /// Number of distinct members competing in each tournament (T).
    ///
    /// - T=1: no selection pressure
    /// - T=2: light pressure (default)
    /// - T=K: every slot goes to the fittest member
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to mutate and evaluate children in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` cargo feature. Results are
    /// identical to the sequential path for the same seed.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            population_size: 100,
            generations: 100,
            mutation_rate: 0.01,
            tournament_size: 2,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the board size.
    pub fn with_board_size(mut self, n: usize) -> Self {
        self.board_size = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    ///
    /// Out-of-range values are kept as given and rejected by
    /// [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel mutation and evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset scaled to the board size.
    ///
    /// Larger boards have a much larger search space, so both the
    /// population and the generation budget grow linearly with `n`.
    ///
    /// - Population: `max(100, 10n)`
    /// - Generations: `max(100, 25n)`
    ///
    /// ```
    /// use nqueens_ga::ga::GaConfig;
    ///
    /// let config = GaConfig::for_board_size(20);
    /// assert_eq!(config.population_size, 200);
    /// assert_eq!(config.generations, 500);
    /// ```
    pub fn for_board_size(n: usize) -> Self {
        Self {
            board_size: n,
            population_size: (10 * n).max(100),
            generations: (25 * n).max(100),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size <= 1 {
            return Err(ConfigError::BoardTooSmall {
                board_size: self.board_size,
            });
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange {
                rate: self.mutation_rate,
            });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroTournament);
        }
        if self.population_size < self.tournament_size {
            return Err(ConfigError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}
