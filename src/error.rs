//! Error types.

use thiserror::Error;

/// Errors raised while constructing genomes, populations, or an evolver.
///
/// All of them are configuration problems detected up front. Once an
/// [`Evolver`](crate::ga::Evolver) exists, the generational loop cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("population must contain at least one genome")]
    EmptyPopulation,

    #[error("genome length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("population size mismatch: expected {expected}, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("allele at index {index} must be 0 or 1, got {value}")]
    InvalidAllele { index: usize, value: u8 },
}

pub type Result<T> = std::result::Result<T, GaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GaError::InvalidConfig("population_size must be at least 1".into()).to_string(),
            "invalid configuration: population_size must be at least 1"
        );
        assert_eq!(
            GaError::LengthMismatch {
                expected: 3,
                found: 4
            }
            .to_string(),
            "genome length mismatch: expected 3, found 4"
        );
        assert_eq!(
            GaError::InvalidAllele { index: 2, value: 7 }.to_string(),
            "allele at index 2 must be 0 or 1, got 7"
        );
    }
}
