//! Genetic-algorithm timetabling.
//!
//! Searches for an assignment of `(subject, teacher, group)` triples to a
//! fixed number of timeslots that minimizes constraint violations:
//!
//! - **GA framework** ([`ga`]): Generic generational loop with truncation
//!   survival, tournament selection, single-child crossover, and mutation.
//! - **Timetabling** ([`timetable`]): Catalog, schedule chromosome, penalty
//!   evaluator, and the problem definition that plugs into the GA.
//! - **Randomness** ([`random`]): Explicit random sources, including a
//!   scripted source for deterministic tests.
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::GaConfig;
//! use u_timetable::timetable::{Catalog, Group, Teacher, TimetableProblem};
//!
//! let catalog = Catalog::new(
//!     vec!["Physics".into(), "Philosophy".into()],
//!     vec![
//!         Teacher::new("Tom", [true, false], 4),
//!         Teacher::new("Mary", [false, true], 4),
//!     ],
//!     vec![Group::new("A", [true, false]), Group::new("B", [false, true])],
//!     6,
//! )?;
//!
//! let config = GaConfig::default().with_max_generations(100).with_seed(7);
//! let result = TimetableProblem::new(&catalog).solve(&config)?;
//! assert!(result.best_fitness <= 0);
//! for row in result.best.rows(&catalog) {
//!     println!("{row}");
//! }
//! # Ok::<(), u_timetable::Error>(())
//! ```
//!
//! The search is a stochastic heuristic: it always runs the configured
//! number of generations and may end above zero penalty.
//!
//! # Logging
//!
//! Progress is emitted through the [`log`] facade (`info` at report
//! checkpoints, `debug` per generation, `trace` per mutation). Install any
//! logger to see it.

pub mod error;
pub mod ga;
pub mod random;
pub mod timetable;

pub use error::{Error, Result};
