//! Per-generation reporting.
//!
//! The evolver calls a [`Reporter`] once per evaluated generation. The
//! algorithm never writes output itself; presentation lives here.

use super::fitness::FitnessSummary;
use super::genome::Genome;
use log::{debug, info};

/// Receives a summary of every evaluated generation.
///
/// Implemented for closures, so ad-hoc reporting needs no new type:
///
/// ```
/// use u_bitga::ga::{Evolver, FitnessSummary, GaConfig, Genome};
///
/// let config = GaConfig::default().with_seed(1);
/// let mut best = Vec::new();
/// let mut record = |_gen: usize, s: &FitnessSummary, _g: &Genome| best.push(s.best_fitness);
///
/// let result = Evolver::new(config)
///     .unwrap()
///     .run_with_reporter(5, &mut record);
/// assert_eq!(best.len(), result.fitness_history.len());
/// ```
pub trait Reporter {
    /// Called with the generation index, its fitness summary, and the first
    /// genome holding the best fitness.
    fn on_generation(&mut self, generation: usize, summary: &FitnessSummary, best: &Genome);
}

impl<F> Reporter for F
where
    F: FnMut(usize, &FitnessSummary, &Genome),
{
    fn on_generation(&mut self, generation: usize, summary: &FitnessSummary, best: &Genome) {
        self(generation, summary, best)
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn on_generation(&mut self, _generation: usize, _summary: &FitnessSummary, _best: &Genome) {}
}

/// Writes one `info` line per generation through the `log` facade.
///
/// With `show_best` enabled the best genome is written at `debug` level
/// right after the summary line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter {
    pub show_best: bool,
}

impl LogReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best_genome(mut self) -> Self {
        self.show_best = true;
        self
    }
}

impl Reporter for LogReporter {
    fn on_generation(&mut self, generation: usize, summary: &FitnessSummary, best: &Genome) {
        info!(
            "Generation[{}]: Average Fitness: {:.3}, Best Fitness: {}",
            generation, summary.average_fitness, summary.best_fitness
        );
        if self.show_best {
            debug!("Best Fit Gene: [ {} ]", best);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_reporter_receives_calls() {
        let genome = Genome::from_bits(&[1, 0]).unwrap();
        let summary = FitnessSummary {
            average_fitness: 1.0,
            best_fitness: 1,
        };
        let mut seen = Vec::new();
        {
            let mut reporter = |g: usize, s: &FitnessSummary, b: &Genome| {
                seen.push((g, s.best_fitness, b.to_bits()));
            };
            reporter.on_generation(0, &summary, &genome);
            reporter.on_generation(1, &summary, &genome);
        }
        assert_eq!(seen, vec![(0, 1, vec![1, 0]), (1, 1, vec![1, 0])]);
    }

    #[test]
    fn test_log_reporter_does_not_panic() {
        let _ = env_logger::builder().is_test(true).try_init();
        let genome = Genome::from_bits(&[1, 1, 0]).unwrap();
        let summary = FitnessSummary {
            average_fitness: 2.0,
            best_fitness: 2,
        };
        let mut reporter = LogReporter::new().with_best_genome();
        assert!(reporter.show_best);
        reporter.on_generation(3, &summary, &genome);
    }
}
