//! Timetable GA problem definition.
//!
//! Implements [`GaProblem`] for timetabling: bridges the [`Catalog`] and
//! [`Schedule`] encoding to the generic GA runner.

use super::catalog::Catalog;
use super::fitness::evaluate;
use super::schedule::{GeneField, Schedule};
use crate::error::Result;
use crate::ga::{operators, GaConfig, GaProblem, GaResult, GaRunner, GenerationReport};
use crate::random::RandomSource;
use log::trace;

/// GA problem definition for timetabling.
///
/// Borrows the catalog for the duration of a search; the catalog is never
/// modified.
///
/// # Example
/// ```
/// use u_timetable::ga::GaConfig;
/// use u_timetable::timetable::{Catalog, Group, Teacher, TimetableProblem};
///
/// let catalog = Catalog::new(
///     vec!["Physics".into()],
///     vec![Teacher::new("Tom", [true], 5)],
///     vec![Group::new("A", [true])],
///     5,
/// )
/// .unwrap();
/// let problem = TimetableProblem::new(&catalog);
/// let result = problem.solve(&GaConfig::default().with_seed(1)).unwrap();
/// assert_eq!(result.best_fitness, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimetableProblem<'a> {
    catalog: &'a Catalog,
}

impl<'a> TimetableProblem<'a> {
    /// Creates a problem over `catalog`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog being scheduled.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn solve(&self, config: &GaConfig) -> Result<GaResult<Schedule>> {
        GaRunner::run(self, config)
    }

    /// Runs the GA with an explicit random source and checkpoint observer.
    pub fn solve_with<R, F>(
        &self,
        config: &GaConfig,
        rng: &mut R,
        observer: F,
    ) -> Result<GaResult<Schedule>>
    where
        R: RandomSource,
        F: FnMut(&GenerationReport<'_, Schedule>),
    {
        GaRunner::run_with(self, config, rng, observer)
    }
}

impl GaProblem for TimetableProblem<'_> {
    type Individual = Schedule;

    fn create_individual<R: RandomSource>(&self, rng: &mut R) -> Schedule {
        Schedule::random(self.catalog, rng)
    }

    fn evaluate(&self, schedule: &Schedule) -> i64 {
        evaluate(schedule, self.catalog)
    }

    /// Embeds one random contiguous block of `parent1` into `parent2`.
    fn crossover<R: RandomSource>(&self, parent1: &Schedule, parent2: &Schedule, rng: &mut R) -> Schedule {
        Schedule::from_genes(operators::segment_crossover(
            parent1.genes(),
            parent2.genes(),
            rng,
        ))
    }

    /// Redraws one field of one gene.
    ///
    /// Draw order: timeslot, field, new value.
    fn mutate<R: RandomSource>(&self, schedule: &mut Schedule, rng: &mut R) {
        let slot = rng.below(schedule.len());
        let field = GeneField::ALL[rng.below(GeneField::ALL.len())];
        let value = rng.below(field.range(self.catalog));
        trace!("timeslot {slot}: {field:?} -> {value}");
        *field.of(&mut schedule.genes_mut()[slot]) = value;
    }
}
