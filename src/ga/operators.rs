//! Binary-string genetic operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: cut both parents at one random point and
//!   swap suffixes
//! - [`crossover_at`]: the same recombination at a caller-chosen point
//!
//! # Mutation
//!
//! - [`mutate`]: per-allele random reset. An allele selected for mutation
//!   gets a fresh fair coin flip, so it keeps its old value half the time.
//!
//! All operators return new genomes and leave their inputs untouched.

use super::genome::Genome;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover with a cut point drawn uniformly from `0..len`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &Genome,
    parent2: &Genome,
    rng: &mut R,
) -> (Genome, Genome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    let point = rng.random_range(0..parent1.len());
    crossover_at(parent1, parent2, point)
}

/// Recombines two parents at `point`.
///
/// - child1 = `parent1[..point]` followed by `parent2[point..]`
/// - child2 = `parent2[..point]` followed by `parent1[point..]`
///
/// `point == 0` swaps the parents entirely.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{operators::crossover_at, Genome};
///
/// let a = Genome::from_bits(&[1, 1, 1, 1]).unwrap();
/// let b = Genome::from_bits(&[0, 0, 0, 0]).unwrap();
/// let (c1, c2) = crossover_at(&a, &b, 1);
/// assert_eq!(c1.to_bits(), vec![1, 0, 0, 0]);
/// assert_eq!(c2.to_bits(), vec![0, 1, 1, 1]);
/// ```
///
/// # Panics
/// Panics if parents have different lengths or `point > len`.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, point: usize) -> (Genome, Genome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(
        point <= parent1.len(),
        "crossover point {point} out of range for genome of length {}",
        parent1.len()
    );

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    child1.alleles_mut()[point..].copy_from_slice(&parent2.alleles()[point..]);
    child2.alleles_mut()[point..].copy_from_slice(&parent1.alleles()[point..]);

    (child1, child2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Returns a mutated copy of `genome`.
///
/// For each allele a uniform `u` in `[0, 1)` is drawn; when `u <= rate`
/// the allele is reset to a fresh random bit. A `rate` of zero never
/// mutates. The input is never modified.
pub fn mutate<R: Rng>(genome: &Genome, rate: f64, rng: &mut R) -> Genome {
    let mut child = genome.clone();
    for allele in child.alleles_mut() {
        let u: f64 = rng.random();
        if rate > 0.0 && u <= rate {
            *allele = rng.random_bool(0.5);
        }
    }
    child
}

// ============================================================================
// Tests
// ============================================================================
