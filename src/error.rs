//! Error types for nqueens-ga.
//!
//! Configuration is validated once, before a run starts. After that no
//! operator can fail, so these are the only error types in the crate.

use thiserror::Error;

/// Error type for rejected run configurations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The board must have at least two columns.
    #[error("board_size must be at least 2, got {board_size}")]
    BoardTooSmall { board_size: usize },

    /// The generation budget must be positive.
    #[error("generations must be at least 1")]
    ZeroGenerations,

    /// Per-gene mutation rate outside `[0, 1]` (or NaN).
    #[error("mutation_rate must lie in [0, 1], got {rate}")]
    MutationRateOutOfRange { rate: f64 },

    /// A tournament needs at least one competitor.
    #[error("tournament_size must be at least 1")]
    ZeroTournament,

    /// Tournaments sample without replacement, so they cannot exceed the population.
    #[error("tournament_size {tournament_size} exceeds population_size {population_size}")]
    TournamentTooLarge {
        tournament_size: usize,
        population_size: usize,
    },

    /// A caller-supplied initial population has the wrong number of members.
    #[error("initial population has {actual} members, expected {expected}")]
    PopulationSizeMismatch { expected: usize, actual: usize },

    /// A caller-supplied chromosome was built for a different board.
    #[error("chromosome {index} has board size {actual}, expected {expected}")]
    BoardSizeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Error type for building a chromosome from raw genes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenomeError {
    /// A chromosome needs at least one gene.
    #[error("chromosome must have at least one gene")]
    Empty,

    /// A gene names a row that does not exist on the board.
    #[error("gene {index} is {gene}, outside [0, {board_size})")]
    GeneOutOfRange {
        index: usize,
        gene: usize,
        board_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::TournamentTooLarge {
            tournament_size: 5,
            population_size: 3,
        };
        assert_eq!(
            err.to_string(),
            "tournament_size 5 exceeds population_size 3"
        );
        assert_eq!(
            ConfigError::BoardTooSmall { board_size: 1 }.to_string(),
            "board_size must be at least 2, got 1"
        );
    }

    #[test]
    fn test_genome_error_message() {
        let err = GenomeError::GeneOutOfRange {
            index: 2,
            gene: 9,
            board_size: 8,
        };
        assert_eq!(err.to_string(), "gene 2 is 9, outside [0, 8)");
    }
}
