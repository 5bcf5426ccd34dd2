//! Population container.

use super::fitness::fitness;
use super::genome::Genome;
use crate::error::{GaError, Result};
use rand::Rng;
use std::fmt;
use std::ops::Index;

/// An ordered, non-empty set of genomes that all share one length.
///
/// A population owns its genomes. The evolver replaces it wholesale at
/// every generation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    genomes: Vec<Genome>,
}

impl Population {
    /// Creates `size` independently randomized genomes of `genome_length`.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if either argument is zero.
    pub fn random<R: Rng>(size: usize, genome_length: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        let genomes = (0..size)
            .map(|_| Genome::random(genome_length, rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { genomes })
    }

    /// Wraps existing genomes.
    ///
    /// # Errors
    /// - [`GaError::EmptyPopulation`] if `genomes` is empty
    /// - [`GaError::LengthMismatch`] if the genomes differ in length
    pub fn from_genomes(genomes: Vec<Genome>) -> Result<Self> {
        let expected = genomes.first().ok_or(GaError::EmptyPopulation)?.len();
        if let Some(odd) = genomes.iter().find(|g| g.len() != expected) {
            return Err(GaError::LengthMismatch {
                expected,
                found: odd.len(),
            });
        }
        Ok(Self { genomes })
    }

    /// Number of genomes.
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    /// Always `false`: populations have at least one genome.
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Length shared by every genome in the population.
    pub fn genome_length(&self) -> usize {
        self.genomes[0].len()
    }

    /// Returns the genome at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Genome> {
        self.genomes.get(index)
    }

    /// Read-only view of the genomes in order.
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// Iterates over the genomes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Genome> {
        self.genomes.iter()
    }

    /// Consumes the population, returning its genomes.
    pub fn into_genomes(self) -> Vec<Genome> {
        self.genomes
    }
}

impl Index<usize> for Population {
    type Output = Genome;

    fn index(&self, index: usize) -> &Genome {
        &self.genomes[index]
    }
}

impl fmt::Display for Population {
    /// One line per genome: `Gene[i] = 1 0 1 Fitness: 2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, genome) in self.genomes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Gene[{}] = {} Fitness: {}", i, genome, fitness(genome))?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Genome;
    type IntoIter = std::slice::Iter<'a, Genome>;

    fn into_iter(self) -> Self::IntoIter {
        self.genomes.iter()
    }
}
