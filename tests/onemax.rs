//! End-to-end behaviour of the public API.

use u_bitga::ga::operators::{crossover_at, mutate};
use u_bitga::ga::{
    evaluate, fitness, Evolver, FitnessSummary, GaConfig, Genome, Population, Termination,
};
use u_bitga::random::create_rng;
use u_bitga::GaError;

fn bits(b: &[u8]) -> Genome {
    Genome::from_bits(b).unwrap()
}

#[test]
fn uniform_population_summary() {
    let pop = Population::from_genomes(vec![bits(&[1, 1, 0]); 4]).unwrap();
    let summary = evaluate(&pop);
    assert_eq!(
        summary,
        FitnessSummary {
            average_fitness: 2.0,
            best_fitness: 2
        }
    );
}

#[test]
fn goal_genome_stops_the_run() {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = GaConfig::default()
        .with_population_size(4)
        .with_genome_length(3)
        .with_seed(9);
    let pop = Population::from_genomes(vec![
        bits(&[0, 0, 1]),
        bits(&[0, 1, 0]),
        bits(&[1, 0, 0]),
        bits(&[1, 1, 1]),
    ])
    .unwrap();

    let mut generations_seen = Vec::new();
    let mut reporter = |gen: usize, s: &FitnessSummary, best: &Genome| {
        generations_seen.push((gen, s.best_fitness, best.to_bits()));
    };
    let result = Evolver::with_population(config, pop)
        .unwrap()
        .run_with_reporter(30, &mut reporter);

    assert_eq!(result.termination, Termination::GoalReached);
    assert_eq!(result.best_fitness, 3);
    assert_eq!(result.generations, 0);
    assert_eq!(generations_seen, vec![(0, 3, vec![1, 1, 1])]);
}

#[test]
fn goal_found_later_is_kept_in_final_population() {
    let config = GaConfig::default()
        .with_population_size(20)
        .with_genome_length(5)
        .with_mutation_rate(0.05)
        .with_seed(3);
    let pop = Population::from_genomes(vec![bits(&[0, 0, 0, 0, 0]); 20]).unwrap();
    let result = Evolver::with_population(config, pop).unwrap().run(5_000);

    assert_eq!(result.termination, Termination::GoalReached);
    assert!(result.generations > 0);
    assert!(result.population.iter().any(Genome::is_all_ones));
    assert_eq!(
        result.fitness_history[result.generations].best_fitness,
        5
    );
    assert!(result.fitness_history[..result.generations]
        .iter()
        .all(|s| s.best_fitness < 5));
}

#[test]
fn crossover_at_zero_swaps_parents() {
    let (c1, c2) = crossover_at(&bits(&[1, 0, 1]), &bits(&[0, 1, 0]), 0);
    assert_eq!(c1, bits(&[0, 1, 0]));
    assert_eq!(c2, bits(&[1, 0, 1]));
}

#[test]
fn mutate_with_zero_rate_copies() {
    let mut rng = create_rng(11);
    let g = Genome::random(40, &mut rng).unwrap();
    let m = mutate(&g, 0.0, &mut rng);
    assert_eq!(m, g);
    assert_eq!(fitness(&m), fitness(&g));
}

#[test]
fn invalid_configs_are_rejected_up_front() {
    assert!(matches!(
        Evolver::new(GaConfig::default().with_population_size(0)),
        Err(GaError::InvalidConfig(_))
    ));
    assert!(matches!(
        Evolver::new(GaConfig::default().with_genome_length(0)),
        Err(GaError::InvalidConfig(_))
    ));
    assert!(matches!(
        Evolver::new(GaConfig::default().with_crossover_rate(f64::INFINITY)),
        Err(GaError::InvalidConfig(_))
    ));
}

#[test]
fn default_config_run_is_reproducible() {
    let config = GaConfig::default().with_seed(2024);
    let a = Evolver::new(config.clone()).unwrap().run_default();
    let b = Evolver::new(config).unwrap().run_default();
    assert_eq!(a.termination, b.termination);
    assert_eq!(a.generations, b.generations);
    assert_eq!(a.best, b.best);
    assert!(a.generations <= 30);
}

#[cfg(feature = "serde")]
#[test]
fn config_and_genome_serde() {
    let config = GaConfig::default().with_seed(5);
    let json = serde_json::to_string(&config).unwrap();
    let back: GaConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let g = bits(&[1, 0, 1]);
    let json = serde_json::to_string(&g).unwrap();
    assert_eq!(json, "[true,false,true]");
    assert_eq!(serde_json::from_str::<Genome>(&json).unwrap(), g);
    assert!(serde_json::from_str::<Genome>("[]").is_err());
}
