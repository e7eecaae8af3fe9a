//! Constraint-violation scoring.
//!
//! Three rules, each worth one penalty point per violation:
//!
//! - **Overload**: a teacher holding more timeslots than `max_hours`
//!   (one point per teacher, however large the overage)
//! - **Competency**: a timeslot whose teacher does not know its subject
//! - **Requirement**: a timeslot whose group does not study its subject
//!
//! The fitness is the negated penalty total, so a perfect schedule scores 0
//! and every schedule scores at most 0.

use super::catalog::Catalog;
use super::schedule::Schedule;

/// Per-rule violation counts for one schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Violations {
    /// Teachers assigned more timeslots than their cap.
    pub overloaded_teachers: usize,
    /// Timeslots whose teacher cannot teach the subject.
    pub unqualified_assignments: usize,
    /// Timeslots whose group does not require the subject.
    pub unrequired_assignments: usize,
}

impl Violations {
    /// Total penalty points.
    pub fn total(&self) -> usize {
        self.overloaded_teachers + self.unqualified_assignments + self.unrequired_assignments
    }

    /// Returns true if no rule is violated.
    pub fn is_feasible(&self) -> bool {
        self.total() == 0
    }
}

/// Counts violations of every rule.
///
/// # Panics
/// Panics if a gene index is out of range for `catalog`.
pub fn violations(schedule: &Schedule, catalog: &Catalog) -> Violations {
    let teachers = catalog.teachers();
    let groups = catalog.groups();

    let mut hours = vec![0usize; teachers.len()];
    let mut v = Violations::default();

    for gene in schedule.genes() {
        hours[gene.teacher] += 1;
        if !teachers[gene.teacher].knows(gene.subject) {
            v.unqualified_assignments += 1;
        }
        if !groups[gene.group].requires(gene.subject) {
            v.unrequired_assignments += 1;
        }
    }

    v.overloaded_teachers = teachers
        .iter()
        .zip(&hours)
        .filter(|(t, &h)| h > t.max_hours)
        .count();

    v
}

/// Scores a schedule: the negated total penalty.
pub fn evaluate(schedule: &Schedule, catalog: &Catalog) -> i64 {
    -(violations(schedule, catalog).total() as i64)
}
