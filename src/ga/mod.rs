//! Genetic Algorithm framework.
//!
//! A generic, domain-agnostic GA built on trait-based abstractions.
//! Users define their problem by implementing [`GaProblem`], which specifies
//! how to create, evaluate, recombine, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its cached fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Generational Model
//!
//! Each generation ranks the population (best first), keeps the top
//! [`survivor_count`](GaConfig::survivor_count) individuals untouched, and
//! refills the remainder with children bred from the survivors by
//! [`tournament`] selection, single-child crossover, and an optional
//! mutation event.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, RATE_RESOLUTION};
pub use runner::{rank, seed_population, GaResult, GaRunner, GenerationReport};
pub use selection::tournament;
pub use types::{Fitness, GaProblem, Individual};
