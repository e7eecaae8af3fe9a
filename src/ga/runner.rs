//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! seeding → evaluation → (rank → truncate → refill) × generations.

use super::config::{GaConfig, RATE_RESOLUTION};
use super::selection::tournament;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::Result;
use crate::random::{create_rng, RandomSource};
use log::{debug, info, trace};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best-ranked individual of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness at every ranking: one entry per generation plus the
    /// final ranking.
    pub fitness_history: Vec<f64>,
}

/// Snapshot handed to the observer at report checkpoints.
#[derive(Debug)]
pub struct GenerationReport<'a, I: Individual> {
    /// Generation index; equals `max_generations` for the final report.
    pub generation: usize,

    /// Best-ranked individual of the population.
    pub best: &'a I,

    /// Fitness of `best`.
    pub best_fitness: I::Fitness,

    /// Population size at ranking time.
    pub population_size: usize,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// if `config` fails validation.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with(problem, config, &mut rng, |_| {})
    }

    /// Runs the GA with an explicit random source and a checkpoint observer.
    ///
    /// `observer` is called at generation 0, every
    /// [`effective_report_interval`](GaConfig::effective_report_interval)
    /// generations after that, and once more after the final generation.
    /// `config.seed` is ignored; `rng` is the only source of randomness.
    pub fn run_with<P, R, F>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        mut observer: F,
    ) -> Result<GaResult<P::Individual>>
    where
        P: GaProblem,
        R: RandomSource,
        F: FnMut(&GenerationReport<'_, P::Individual>),
    {
        config.validate()?;

        let target = config.population_size;
        let survivors = config.survivor_count();
        let interval = config.effective_report_interval();
        let mutation_threshold = config.mutation_threshold();

        // 1. Seed and evaluate
        let mut population = seed_population(problem, target, rng);
        evaluate_population(problem, &mut population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            debug_assert_eq!(population.len(), target);

            rank(&mut population);
            let best_fitness = population[0].fitness();
            fitness_history.push(best_fitness.to_f64());

            if gen % interval == 0 {
                info!(
                    "generation {gen}: best fitness {:?} (population {})",
                    best_fitness,
                    population.len()
                );
                observer(&GenerationReport {
                    generation: gen,
                    best: &population[0],
                    best_fitness,
                    population_size: population.len(),
                });
            } else {
                debug!("generation {gen}: best fitness {:?}", best_fitness);
            }

            // Truncation: the top `survivors` are kept untouched
            population.truncate(survivors);

            // Refill from the survivors
            let mut offspring = Vec::with_capacity(target - population.len());
            while population.len() + offspring.len() < target {
                let p1 = tournament(&population, config.tournament_size, rng);
                let p2 = tournament(&population, config.tournament_size, rng);

                let mut child = problem.crossover(&population[p1], &population[p2], rng);

                if rng.below(RATE_RESOLUTION) < mutation_threshold {
                    trace!("generation {gen}: mutating child {}", offspring.len());
                    problem.mutate(&mut child, rng);
                }

                offspring.push(child);
            }

            evaluate_population(problem, &mut offspring, config.parallel);
            population.append(&mut offspring);
        }

        // 3. Final ranking
        rank(&mut population);
        let best = population[0].clone();
        let best_fitness = best.fitness();
        fitness_history.push(best_fitness.to_f64());

        info!(
            "finished after {} generations: best fitness {:?}",
            config.max_generations, best_fitness
        );
        observer(&GenerationReport {
            generation: config.max_generations,
            best: &best,
            best_fitness,
            population_size: population.len(),
        });

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.max_generations,
            fitness_history,
        })
    }
}

/// Creates `size` independent random individuals.
///
/// Individuals are returned unevaluated.
pub fn seed_population<P: GaProblem, R: RandomSource>(
    problem: &P,
    size: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    (0..size).map(|_| problem.create_individual(rng)).collect()
}

/// Sorts the population by cached fitness, best first.
///
/// The sort is stable: equally fit individuals keep their relative order.
pub fn rank<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| {
        b.fitness()
            .partial_cmp(&a.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Evaluate all individuals in the slice.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        for ind in population.iter_mut() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

/// Evaluate all individuals in the slice.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

// ============================================================================
// Tests
// ============================================================================
