//! GA evolutionary loop execution.
//!
//! [`Evolver`] orchestrates the generational process:
//! selection → crossover → mutation → collect → goal check → replace.

use super::config::GaConfig;
use super::fitness::{best_index, evaluate, fitness, FitnessSummary};
use super::genome::Genome;
use super::operators::{mutate, single_point_crossover};
use super::population::Population;
use super::report::{NoopReporter, Reporter};
use super::selection::select_pair;
use crate::error::{GaError, Result};
use crate::random::rng_from_seed;
use log::{debug, info, log_enabled, trace, Level};
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A genome of all 1s was found in the current population.
    GoalReached,

    /// The generation ceiling was hit first.
    MaxGenerationsExhausted,

    /// The cancellation flag was set between generations.
    Cancelled,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The final population.
    ///
    /// With [`Termination::GoalReached`] this is the population that
    /// contains the goal genome, not the offspring built from it.
    pub population: Population,

    /// Why the run stopped.
    pub termination: Termination,

    /// Generation counter at termination (number of population
    /// replacements). With `GoalReached` it is the index of the generation
    /// in which the goal genome was found.
    pub generations: usize,

    /// First genome with the highest fitness in `population`.
    pub best: Genome,

    /// Fitness of `best`.
    pub best_fitness: usize,

    /// Summary of every evaluated generation, in order.
    pub fitness_history: Vec<FitnessSummary>,
}

/// Runs the binary GA over one owned population.
///
/// The evolver owns its configuration, population, and random generator.
/// Construction validates everything up front; once built, no operation in
/// the loop can fail.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{Evolver, GaConfig, Termination};
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_genome_length(8)
///     .with_seed(42);
/// let result = Evolver::new(config).unwrap().run(100);
///
/// assert!(result.generations <= 100);
/// if result.termination == Termination::GoalReached {
///     assert!(result.best.is_all_ones());
/// }
/// ```
#[derive(Debug)]
pub struct Evolver<R: Rng = StdRng> {
    config: GaConfig,
    population: Population,
    rng: R,
    generation: usize,
    fitness_history: Vec<FitnessSummary>,
}

impl Evolver<StdRng> {
    /// Creates an evolver with a random initial population.
    ///
    /// The generator is seeded from `config.seed`, or from OS entropy when
    /// no seed is set.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: GaConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, rng)
    }

    /// Creates an evolver that starts from `population`.
    ///
    /// # Errors
    /// See [`with_population_and_rng`](Evolver::with_population_and_rng).
    pub fn with_population(config: GaConfig, population: Population) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_population_and_rng(config, population, rng)
    }
}

impl<R: Rng> Evolver<R> {
    /// Creates an evolver with a random initial population drawn from `rng`.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if the configuration is invalid.
    pub fn with_rng(config: GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let population =
            Population::random(config.population_size, config.genome_length, &mut rng)?;
        Ok(Self::assemble(config, population, rng))
    }

    /// Creates an evolver that starts from `population` and draws from `rng`.
    ///
    /// # Errors
    /// - [`GaError::InvalidConfig`] if the configuration is invalid
    /// - [`GaError::SizeMismatch`] if `population.len() != population_size`
    /// - [`GaError::LengthMismatch`] if the genome length differs from
    ///   `genome_length`
    pub fn with_population_and_rng(config: GaConfig, population: Population, rng: R) -> Result<Self> {
        config.validate()?;
        if population.len() != config.population_size {
            return Err(GaError::SizeMismatch {
                expected: config.population_size,
                found: population.len(),
            });
        }
        if population.genome_length() != config.genome_length {
            return Err(GaError::LengthMismatch {
                expected: config.genome_length,
                found: population.genome_length(),
            });
        }
        Ok(Self::assemble(config, population, rng))
    }

    fn assemble(config: GaConfig, population: Population, rng: R) -> Self {
        Self {
            config,
            population,
            rng,
            generation: 0,
            fitness_history: Vec::new(),
        }
    }

    /// The configuration this evolver was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of population replacements performed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Summaries of every generation evaluated so far.
    pub fn fitness_history(&self) -> &[FitnessSummary] {
        &self.fitness_history
    }

    /// Runs until the goal is found or `max_generations` replacements have
    /// been made.
    pub fn run(self, max_generations: usize) -> GaResult {
        self.run_with_cancel(max_generations, &mut NoopReporter, None)
    }

    /// Runs with the ceiling from [`GaConfig::max_generations`].
    pub fn run_default(self) -> GaResult {
        let max_generations = self.config.max_generations;
        self.run(max_generations)
    }

    /// Runs, handing every generation summary to `reporter`.
    pub fn run_with_reporter<P: Reporter + ?Sized>(
        self,
        max_generations: usize,
        reporter: &mut P,
    ) -> GaResult {
        self.run_with_cancel(max_generations, reporter, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is checked before each generation starts. A generation in
    /// progress always completes.
    pub fn run_with_cancel<P: Reporter + ?Sized>(
        mut self,
        max_generations: usize,
        reporter: &mut P,
        cancel: Option<Arc<AtomicBool>>,
    ) -> GaResult {
        info!(
            "GA run: population_size={}, genome_length={}, crossover_rate={}, mutation_rate={}, max_generations={}",
            self.config.population_size,
            self.config.genome_length,
            self.config.crossover_rate,
            self.config.mutation_rate,
            max_generations
        );

        let start = self.generation;
        let termination = loop {
            if self.generation - start >= max_generations {
                break Termination::MaxGenerationsExhausted;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }
            if let Some(reached) = self.step(reporter) {
                break reached;
            }
        };

        self.finish(termination)
    }

    /// Advances exactly one generation.
    ///
    /// Builds the next generation from the current one, evaluates the
    /// current one, and reports it. If the current population holds the
    /// goal genome it is kept and `Some(Termination::GoalReached)` is
    /// returned; otherwise it is replaced by the next generation and `None`
    /// is returned.
    pub fn step<P: Reporter + ?Sized>(&mut self, reporter: &mut P) -> Option<Termination> {
        let next = self.breed();

        let summary = evaluate(&self.population);
        if log_enabled!(Level::Trace) {
            trace!("generation {} population:\n{}", self.generation, self.population);
        }
        let best = &self.population[best_index(&self.population)];
        reporter.on_generation(self.generation, &summary, best);
        self.fitness_history.push(summary);

        if summary.best_fitness == self.config.genome_length {
            debug!(
                "goal genome found in generation {}: [ {} ]",
                self.generation, best
            );
            return Some(Termination::GoalReached);
        }

        self.population = next;
        self.generation += 1;
        None
    }

    /// Builds the next generation from the current population.
    ///
    /// Pairs are appended until the target size is met; the second child of
    /// the final pair is dropped when the size is odd.
    fn breed(&mut self) -> Population {
        let target = self.config.population_size;
        let mut next: Vec<Genome> = Vec::with_capacity(target + 1);
        let mut crossovers = 0usize;

        while next.len() < target {
            let (mut g1, mut g2) = select_pair(&self.population, &mut self.rng);

            let u: f64 = self.rng.random();
            if self.config.crossover_rate > 0.0 && u <= self.config.crossover_rate {
                (g1, g2) = single_point_crossover(&g1, &g2, &mut self.rng);
                crossovers += 1;
            }

            next.push(mutate(&g1, self.config.mutation_rate, &mut self.rng));
            next.push(mutate(&g2, self.config.mutation_rate, &mut self.rng));
        }
        next.truncate(target);

        trace!(
            "generation {}: bred {} genomes with {} crossovers",
            self.generation,
            next.len(),
            crossovers
        );

        Population::from_genomes(next).expect("offspring share the parents' genome length")
    }

    fn finish(self, termination: Termination) -> GaResult {
        let best = self.population[best_index(&self.population)].clone();
        let best_fitness = fitness(&best);

        info!(
            "GA finished: {:?} after {} generations, best fitness {}/{}",
            termination, self.generation, best_fitness, self.config.genome_length
        );

        GaResult {
            population: self.population,
            termination,
            generations: self.generation,
            best,
            best_fitness,
            fitness_history: self.fitness_history,
        }
    }

    /// Consumes the evolver, returning the current population.
    pub fn into_population(self) -> Population {
        self.population
    }
}

// ============================================================================
// Tests
// ============================================================================
