//! Binary-string genetic algorithm.
//!
//! Evolves a population of fixed-length bit strings toward the all-ones
//! genome (the OneMax problem) using:
//!
//! - **Roulette-wheel selection**: parents are drawn with probability
//!   proportional to their fitness, uniformly when every genome scores zero.
//! - **Single-point crossover**: applied to a selected pair with a fixed
//!   probability.
//! - **Random-reset mutation**: each allele is redrawn with a fixed
//!   per-allele probability.
//!
//! The engine is single-threaded and fully deterministic for a given seed.
//! See [`ga::Evolver`] for the entry point.
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{Evolver, GaConfig, LogReporter};
//!
//! let config = GaConfig::default().with_seed(42);
//! let result = Evolver::new(config)
//!     .unwrap()
//!     .run_with_reporter(30, &mut LogReporter::new());
//!
//! println!("{:?} after {} generations", result.termination, result.generations);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
