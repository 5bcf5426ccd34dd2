//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! Each genome owns a slice of the wheel as wide as its fitness. A pick
//! draws a ticket in `1..=total` and walks the population in order,
//! subtracting fitness until the ticket is used up. Genomes with zero
//! fitness own no slice and are never picked, unless every genome has zero
//! fitness, in which case picks are uniform.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::fitness::{fitness, total_fitness};
use super::genome::Genome;
use super::population::Population;
use rand::Rng;

/// Picks one genome index by roulette wheel.
///
/// `total` must be the population's total fitness, as returned by
/// [`total_fitness`]. When it is zero every index is equally likely.
///
/// # Complexity
/// O(n) per pick (linear scan)
pub fn select_index<R: Rng>(population: &Population, total: usize, rng: &mut R) -> usize {
    let n = population.len();
    if total == 0 {
        return rng.random_range(0..n);
    }

    let mut remaining = rng.random_range(1..=total);
    for (i, genome) in population.iter().enumerate() {
        let f = fitness(genome);
        if remaining <= f {
            return i;
        }
        remaining -= f;
    }

    // Unreachable when `total` matches the population.
    n - 1
}

/// Draws two parents independently; the same genome may be drawn twice.
///
/// Returns owned copies so the caller can recombine and mutate them while
/// the source population stays untouched.
pub fn select_pair<R: Rng>(population: &Population, rng: &mut R) -> (Genome, Genome) {
    let total = total_fitness(population);
    let first = select_index(population, total, rng);
    let second = select_index(population, total, rng);
    (population[first].clone(), population[second].clone())
}
