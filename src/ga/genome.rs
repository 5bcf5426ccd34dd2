//! Fixed-length binary genome.
//!
//! A [`Genome`] is an owned sequence of alleles. Alleles are stored as
//! `bool` (`true` is a 1, `false` is a 0), so a genome can never hold a
//! value outside {0, 1}. The length is fixed at construction and is always
//! at least one.

use crate::error::{GaError, Result};
use rand::Rng;
use std::fmt;
use std::ops::Index;

/// A candidate solution: a fixed-length binary string.
///
/// `Clone` is a deep copy; two genomes never share allele storage.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Genome;
///
/// let mut g = Genome::from_bits(&[1, 0, 1]).unwrap();
/// assert_eq!(g.len(), 3);
/// assert_eq!(g.get(1), Some(false));
///
/// g.set(1, true);
/// assert_eq!(g.to_string(), "1 1 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<bool>", into = "Vec<bool>"))]
pub struct Genome {
    alleles: Vec<bool>,
}

impl Genome {
    /// Creates a genome whose alleles are independent fair coin flips.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if `length` is zero.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Result<Self> {
        if length == 0 {
            return Err(GaError::InvalidConfig(
                "genome_length must be at least 1".into(),
            ));
        }
        let alleles = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Ok(Self { alleles })
    }

    /// Builds a genome from already-typed alleles.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if `alleles` is empty.
    pub fn from_alleles(alleles: Vec<bool>) -> Result<Self> {
        if alleles.is_empty() {
            return Err(GaError::InvalidConfig(
                "genome_length must be at least 1".into(),
            ));
        }
        Ok(Self { alleles })
    }

    /// Builds a genome from `0`/`1` values.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidAllele`] for any value other than 0 or 1,
    /// and [`GaError::InvalidConfig`] for an empty slice.
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let alleles = bits
            .iter()
            .enumerate()
            .map(|(index, &value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(GaError::InvalidAllele { index, value }),
            })
            .collect::<Result<Vec<bool>>>()?;
        Self::from_alleles(alleles)
    }

    /// Number of alleles.
    pub fn len(&self) -> usize {
        self.alleles.len()
    }

    /// Always `false`: genomes have at least one allele.
    pub fn is_empty(&self) -> bool {
        self.alleles.is_empty()
    }

    /// Returns the allele at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.alleles.get(index).copied()
    }

    /// Overwrites the allele at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: bool) {
        let len = self.alleles.len();
        match self.alleles.get_mut(index) {
            Some(slot) => *slot = value,
            None => panic!("allele index {index} out of range for genome of length {len}"),
        }
    }

    /// Read-only view of the alleles.
    pub fn alleles(&self) -> &[bool] {
        &self.alleles
    }

    /// Mutable view of the alleles. The length cannot change through it.
    pub(crate) fn alleles_mut(&mut self) -> &mut [bool] {
        &mut self.alleles
    }

    /// Alleles as `0`/`1` values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.alleles.iter().map(|&a| u8::from(a)).collect()
    }

    /// Returns `true` if every allele is 1.
    pub fn is_all_ones(&self) -> bool {
        self.alleles.iter().all(|&a| a)
    }
}

impl TryFrom<Vec<bool>> for Genome {
    type Error = GaError;

    fn try_from(alleles: Vec<bool>) -> Result<Self> {
        Self::from_alleles(alleles)
    }
}

impl From<Genome> for Vec<bool> {
    fn from(genome: Genome) -> Self {
        genome.alleles
    }
}

impl Index<usize> for Genome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.alleles[index]
    }
}

impl fmt::Display for Genome {
    /// Space-separated `0`/`1` digits, e.g. `1 0 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &allele) in self.alleles.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", u8::from(allele))?;
        }
        Ok(())
    }
}
