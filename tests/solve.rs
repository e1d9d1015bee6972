//! End-to-end runs through the public entry point.

use nqueens_ga::ga::max_fitness;
use nqueens_ga::random::create_rng;
use nqueens_ga::{genetic_algorithm, Chromosome, ConfigError, GaConfig, GaRunner, Termination};

#[test]
fn known_solution_scores_maximum() {
    let c = Chromosome::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
    assert_eq!(c.fitness(), 28);
}

#[test]
fn seeded_default_run_is_deterministic() {
    let config = GaConfig::default()
        .with_population_size(100)
        .with_generations(100)
        .with_mutation_rate(0.01)
        .with_seed(2024);

    let first = genetic_algorithm(&config).unwrap();
    for _ in 0..3 {
        let again = genetic_algorithm(&config).unwrap();
        assert_eq!(again.best, first.best);
        assert_eq!(again.termination, first.termination);
        assert_eq!(again.history, first.history);
    }
}

#[test]
fn seeding_a_solution_converges_before_budget() {
    let perfect = Chromosome::new(vec![0, 4, 7, 5, 2, 6, 1, 3]).unwrap();
    let mut population = vec![perfect];
    let mut rng = create_rng(99);
    population.extend(nqueens_ga::ga::population::initial_population(49, 8, &mut rng));

    let config = GaConfig::default()
        .with_population_size(50)
        .with_generations(500)
        .with_seed(1);
    let result = GaRunner::run_with_population(&config, population).unwrap();

    assert_eq!(result.termination, Termination::Converged);
    assert_eq!(result.generations, 1);
    assert!(result.best.is_solution());
}

#[test]
fn converged_result_is_a_real_solution() {
    // Scan a handful of seeds; any run that reports convergence must hold a
    // placement with no attacking pair.
    for seed in 0..5 {
        let config = GaConfig::for_board_size(6).with_seed(seed);
        let result = genetic_algorithm(&config).unwrap();
        assert_eq!(result.best_fitness, result.best.fitness());
        if result.converged() {
            assert_eq!(result.best_fitness, max_fitness(6));
            assert!(result.best.is_solution());
        } else {
            assert_eq!(result.generations, config.generations);
        }
    }
}

#[test]
fn larger_board_run_stays_well_formed() {
    let config = GaConfig::default()
        .with_board_size(14)
        .with_population_size(40)
        .with_generations(25)
        .with_tournament_size(3)
        .with_mutation_rate(0.05)
        .with_seed(77);
    let result = genetic_algorithm(&config).unwrap();
    assert_eq!(result.best.board_size(), 14);
    assert!(result.best.genes().iter().all(|&g| g < 14));
    assert!(result.best_fitness <= max_fitness(14));
}

#[test]
fn invalid_configurations_fail_fast() {
    let cases = [
        (
            GaConfig::default().with_board_size(1),
            ConfigError::BoardTooSmall { board_size: 1 },
        ),
        (
            GaConfig::default().with_generations(0),
            ConfigError::ZeroGenerations,
        ),
        (
            GaConfig::default().with_mutation_rate(1.01),
            ConfigError::MutationRateOutOfRange { rate: 1.01 },
        ),
        (
            GaConfig::default()
                .with_population_size(2)
                .with_tournament_size(3),
            ConfigError::TournamentTooLarge {
                tournament_size: 3,
                population_size: 2,
            },
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(genetic_algorithm(&config).unwrap_err(), expected);
    }
}

#[cfg(feature = "serde")]
#[test]
fn result_serializes_genes_and_termination() {
    let result = genetic_algorithm(&GaConfig::default().with_seed(3)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["best"].as_array().unwrap().len(), 8);
    assert!(json["termination"].is_string());
}
