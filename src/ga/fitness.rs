//! Fitness evaluation.
//!
//! Fitness is the number of 1-alleles in a genome (the OneMax objective).
//! Higher is better; the maximum equals the genome length.

use super::genome::Genome;
use super::population::Population;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Aggregate statistics of one population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessSummary {
    /// Arithmetic mean of the genomes' fitness.
    pub average_fitness: f64,

    /// Highest fitness in the population.
    pub best_fitness: usize,
}

/// Counts the 1-alleles of `genome`.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{fitness, Genome};
///
/// let g = Genome::from_bits(&[1, 0, 1, 1]).unwrap();
/// assert_eq!(fitness(&g), 3);
/// ```
pub fn fitness(genome: &Genome) -> usize {
    genome.alleles().iter().filter(|&&a| a).count()
}

/// Sum of fitness over the population.
pub fn total_fitness(population: &Population) -> usize {
    population.iter().map(fitness).sum()
}

/// Computes the average and best fitness of `population`.
///
/// Populations are never empty, so the average is always defined.
pub fn evaluate(population: &Population) -> FitnessSummary {
    let scores = scores(population);
    let sum: usize = scores.iter().sum();
    let best_fitness = scores.iter().copied().max().unwrap_or(0);

    FitnessSummary {
        average_fitness: sum as f64 / population.len() as f64,
        best_fitness,
    }
}

/// Index of the first genome with the highest fitness.
pub fn best_index(population: &Population) -> usize {
    let mut best_idx = 0;
    let mut best = fitness(&population[0]);
    for (i, genome) in population.iter().enumerate().skip(1) {
        let f = fitness(genome);
        if f > best {
            best = f;
            best_idx = i;
        }
    }
    best_idx
}

#[cfg(feature = "parallel")]
fn scores(population: &Population) -> Vec<usize> {
    population.genomes().par_iter().map(fitness).collect()
}

#[cfg(not(feature = "parallel"))]
fn scores(population: &Population) -> Vec<usize> {
    population.iter().map(fitness).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn pop_of(bits: &[&[u8]]) -> Population {
        Population::from_genomes(
            bits.iter()
                .map(|b| Genome::from_bits(b).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_fitness_counts_ones() {
        assert_eq!(fitness(&Genome::from_bits(&[0, 0, 0]).unwrap()), 0);
        assert_eq!(fitness(&Genome::from_bits(&[1, 0, 1]).unwrap()), 2);
        assert_eq!(fitness(&Genome::from_bits(&[1, 1, 1, 1]).unwrap()), 4);
    }

    #[test]
    fn test_evaluate_uniform_population() {
        let pop = pop_of(&[&[1, 1, 0], &[1, 1, 0], &[1, 1, 0], &[1, 1, 0]]);
        let summary = evaluate(&pop);
        assert!((summary.average_fitness - 2.0).abs() < 1e-12);
        assert_eq!(summary.best_fitness, 2);
    }

    #[test]
    fn test_evaluate_mixed_population() {
        let pop = pop_of(&[&[0, 0, 0, 0], &[1, 0, 0, 1], &[1, 1, 1, 0]]);
        let summary = evaluate(&pop);
        assert!((summary.average_fitness - 5.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.best_fitness, 3);
        assert_eq!(total_fitness(&pop), 5);
    }

    #[test]
    fn test_evaluate_matches_individual_scores() {
        let mut rng = create_rng(42);
        let pop = Population::random(30, 16, &mut rng).unwrap();
        let scores: Vec<usize> = pop.iter().map(fitness).collect();
        let summary = evaluate(&pop);

        let mean = scores.iter().sum::<usize>() as f64 / scores.len() as f64;
        assert_eq!(summary.best_fitness, *scores.iter().max().unwrap());
        assert!((summary.average_fitness - mean).abs() < 1e-12);
    }

    #[test]
    fn test_best_index_takes_first_maximum() {
        let pop = pop_of(&[&[1, 0, 0], &[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]);
        assert_eq!(best_index(&pop), 1);
    }

    proptest! {
        #[test]
        fn prop_fitness_is_count_of_ones(bits in prop::collection::vec(0u8..=1, 1..64)) {
            let g = Genome::from_bits(&bits).unwrap();
            let ones = bits.iter().filter(|&&b| b == 1).count();
            prop_assert_eq!(fitness(&g), ones);
            prop_assert_eq!(fitness(&g.clone()), ones);
            prop_assert!(fitness(&g) <= g.len());
        }
    }
}
