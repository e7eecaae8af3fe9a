//! Timetabling on top of the GA framework.
//!
//! Assigns a `(subject, teacher, group)` triple to every timeslot so that
//! teachers only teach what they know, groups only get subjects they study,
//! and no teacher exceeds their hour cap.
//!
//! # Key Types
//!
//! - [`Catalog`]: Validated subjects, teachers, groups, and timeslot count
//! - [`Schedule`]: The chromosome — one [`Gene`] per timeslot
//! - [`Violations`]: Per-rule penalty breakdown; [`evaluate`] negates its total
//! - [`TimetableProblem`]: [`GaProblem`](crate::ga::GaProblem) implementation

mod catalog;
mod fitness;
mod problem;
mod schedule;

pub use catalog::{Catalog, Group, Teacher};
pub use fitness::{evaluate, violations, Violations};
pub use problem::TimetableProblem;
pub use schedule::{Gene, GeneField, Schedule, ScheduleRow};
