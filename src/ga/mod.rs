//! Genetic algorithm over binary genomes.
//!
//! # Key Types
//!
//! - [`Genome`]: fixed-length bit string, value semantics
//! - [`Population`]: non-empty set of equally long genomes
//! - [`GaConfig`]: algorithm parameters
//! - [`Evolver`]: executes the generational loop
//! - [`GaResult`]: final population, termination reason, statistics
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and random-reset mutation
//! - [`selection`]: roulette-wheel parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
mod genome;
pub mod operators;
mod population;
mod report;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use fitness::{best_index, evaluate, fitness, total_fitness, FitnessSummary};
pub use genome::Genome;
pub use population::Population;
pub use report::{LogReporter, NoopReporter, Reporter};
pub use runner::{Evolver, GaResult, Termination};
