//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{Error, Result};

/// Granularity of the mutation coin flip.
///
/// The runner draws an integer in `[0, RATE_RESOLUTION)` and mutates when it
/// falls below `mutation_rate * RATE_RESOLUTION`.
pub const RATE_RESOLUTION: usize = 10_000;

/// Number of report checkpoints spread over a run when no explicit
/// interval is configured.
const DEFAULT_CHECKPOINTS: usize = 15;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, run length, selection pressure, survivor
/// fraction, mutation rate, reporting cadence, and parallelism.
///
/// A run always executes `max_generations` full generations; there is no
/// stagnation or fitness-threshold stop.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(200)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals at the start and end of every generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Individuals drawn (with replacement) per tournament.
    pub tournament_size: usize,

    /// Fraction of the ranked population kept unchanged each generation
    /// (0.0 exclusive – 1.0 inclusive).
    ///
    /// The survivor count is rounded up, so with the default 0.5 an odd
    /// population keeps its larger half (11 → 6) and a population of one
    /// keeps its only member. See [`survivor_count`](Self::survivor_count).
    pub survivor_ratio: f64,

    /// Probability (0.0–1.0) that a child receives one mutation event.
    pub mutation_rate: f64,

    /// Report every `n` generations. `None` spreads
    /// 15 checkpoints across the run.
    pub report_interval: Option<usize>,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_generations: 500,
            tournament_size: 3,
            survivor_ratio: 0.5,
            mutation_rate: 0.1,
            report_interval: None,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the survivor ratio.
    pub fn with_survivor_ratio(mut self, ratio: f64) -> Self {
        self.survivor_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the report interval in generations.
    pub fn with_report_interval(mut self, every: usize) -> Self {
        self.report_interval = Some(every);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of ranked individuals that survive truncation.
    ///
    /// `ceil(population_size * survivor_ratio)`, clamped to
    /// `1..=population_size`.
    pub fn survivor_count(&self) -> usize {
        let kept = (self.population_size as f64 * self.survivor_ratio).ceil() as usize;
        kept.clamp(1, self.population_size.max(1))
    }

    /// Effective report interval.
    pub fn effective_report_interval(&self) -> usize {
        self.report_interval
            .unwrap_or(self.max_generations / DEFAULT_CHECKPOINTS)
            .max(1)
    }

    /// Threshold for the mutation coin flip, in units of [`RATE_RESOLUTION`].
    pub(crate) fn mutation_threshold(&self) -> usize {
        (self.mutation_rate.clamp(0.0, 1.0) * RATE_RESOLUTION as f64).round() as usize
    }

    /// Validates the configuration.
    ///
    /// Returns [`Error::InvalidConfiguration`] if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::invalid("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(Error::invalid("max_generations must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(Error::invalid("tournament_size must be at least 1"));
        }
        if !(self.survivor_ratio > 0.0 && self.survivor_ratio <= 1.0) {
            return Err(Error::invalid("survivor_ratio must be in (0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid("mutation_rate must be in [0, 1]"));
        }
        if self.report_interval == Some(0) {
            return Err(Error::invalid("report_interval must be positive or None"));
        }
        Ok(())
    }
}
