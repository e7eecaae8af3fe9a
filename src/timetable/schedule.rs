//! Schedule chromosome.
//!
//! # Encoding
//!
//! A [`Schedule`] is a fixed-length sequence of [`Gene`]s, one per timeslot;
//! the position in the sequence *is* the timeslot. Each gene holds three
//! independent indices into the catalog's subject, teacher, and group lists.
//! Whether the three fit together (does the teacher know the subject? does
//! the group take it?) is scored by the evaluator, not enforced here.

use std::fmt;

use super::catalog::Catalog;
use crate::ga::{Fitness, Individual};
use crate::random::RandomSource;

/// One timeslot's assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene {
    /// Subject index.
    pub subject: usize,
    /// Teacher index.
    pub teacher: usize,
    /// Group index.
    pub group: usize,
}

impl Gene {
    /// Creates a gene.
    pub fn new(subject: usize, teacher: usize, group: usize) -> Self {
        Self {
            subject,
            teacher,
            group,
        }
    }

    /// Draws every field uniformly from its catalog range.
    pub fn random<R: RandomSource>(catalog: &Catalog, rng: &mut R) -> Self {
        Self {
            subject: rng.below(catalog.subject_count()),
            teacher: rng.below(catalog.teacher_count()),
            group: rng.below(catalog.group_count()),
        }
    }
}

/// Selects one field of a [`Gene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneField {
    /// The subject index.
    Subject,
    /// The teacher index.
    Teacher,
    /// The group index.
    Group,
}

impl GeneField {
    /// All fields, in draw order.
    pub const ALL: [GeneField; 3] = [GeneField::Subject, GeneField::Teacher, GeneField::Group];

    /// Number of distinct values this field can take in `catalog`.
    pub fn range(self, catalog: &Catalog) -> usize {
        match self {
            GeneField::Subject => catalog.subject_count(),
            GeneField::Teacher => catalog.teacher_count(),
            GeneField::Group => catalog.group_count(),
        }
    }

    /// Mutable access to this field of `gene`.
    pub fn of(self, gene: &mut Gene) -> &mut usize {
        match self {
            GeneField::Subject => &mut gene.subject,
            GeneField::Teacher => &mut gene.teacher,
            GeneField::Group => &mut gene.group,
        }
    }
}

/// A complete timetable: one gene per timeslot.
///
/// Higher fitness = better schedule (0 means no violations).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    genes: Vec<Gene>,
    fitness: i64,
}

impl Individual for Schedule {
    type Fitness = i64;

    fn fitness(&self) -> i64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: i64) {
        self.fitness = fitness;
    }
}

impl Schedule {
    /// Wraps a gene sequence as an unevaluated schedule.
    pub fn from_genes(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: i64::worst(),
        }
    }

    /// Creates a random schedule covering every timeslot of `catalog`.
    pub fn random<R: RandomSource>(catalog: &Catalog, rng: &mut R) -> Self {
        let genes = (0..catalog.timeslots())
            .map(|_| Gene::random(catalog, rng))
            .collect();
        Self::from_genes(genes)
    }

    /// Genes in timeslot order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Mutable genes. The length cannot change through a slice.
    pub fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Number of timeslots.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if the schedule has no timeslots.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Resolves every gene against `catalog` names.
    ///
    /// # Panics
    /// Panics if a gene index is out of range for `catalog` (the schedule
    /// was built for a different catalog).
    pub fn rows<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = ScheduleRow<'a>> + 'a {
        self.genes.iter().enumerate().map(move |(slot, gene)| ScheduleRow {
            timeslot: slot + 1,
            subject: &catalog.subjects()[gene.subject],
            teacher: &catalog.teachers()[gene.teacher].name,
            group: &catalog.groups()[gene.group].name,
        })
    }
}

/// A gene with catalog names resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRow<'a> {
    /// Timeslot number, starting at 1.
    pub timeslot: usize,
    /// Subject name.
    pub subject: &'a str,
    /// Teacher name.
    pub teacher: &'a str,
    /// Group name.
    pub group: &'a str,
}

impl fmt::Display for ScheduleRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Timeslot {}: {}, {}, {}",
            self.timeslot, self.subject, self.teacher, self.group
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, ScriptedSource};
    use crate::timetable::{Group, Teacher};

    fn catalog() -> Catalog {
        Catalog::new(
            vec!["Physics".into(), "Chemistry".into(), "Calculus".into()],
            vec![
                Teacher::new("Tom", [true, false, false], 2),
                Teacher::new("Mary", [false, true, true], 2),
            ],
            vec![Group::new("A", [true, true, false])],
            4,
        )
        .expect("valid catalog")
    }

    #[test]
    fn test_random_schedule_in_bounds() {
        let catalog = catalog();
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let s = Schedule::random(&catalog, &mut rng);
            assert_eq!(s.len(), 4);
            for g in s.genes() {
                assert!(g.subject < 3);
                assert!(g.teacher < 2);
                assert!(g.group < 1);
            }
        }
    }

    #[test]
    fn test_random_gene_draw_order() {
        let catalog = catalog();
        let mut src = ScriptedSource::new([2, 1, 0]);
        assert_eq!(Gene::random(&catalog, &mut src), Gene::new(2, 1, 0));
    }

    #[test]
    fn test_new_schedule_is_unevaluated() {
        let s = Schedule::from_genes(vec![Gene::new(0, 0, 0)]);
        assert_eq!(s.fitness(), i64::MIN);
    }

    #[test]
    fn test_gene_field_access() {
        let catalog = catalog();
        let mut gene = Gene::new(0, 0, 0);
        *GeneField::Teacher.of(&mut gene) = 1;
        assert_eq!(gene, Gene::new(0, 1, 0));
        assert_eq!(GeneField::Subject.range(&catalog), 3);
        assert_eq!(GeneField::Teacher.range(&catalog), 2);
        assert_eq!(GeneField::Group.range(&catalog), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let catalog = catalog();
        let mut s = Schedule::random(&catalog, &mut create_rng(8));
        s.set_fitness(-3);

        let json = serde_json::to_string(&s).expect("serializable");
        let back: Schedule = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back.genes(), s.genes());
        assert_eq!(back.fitness(), -3);

        let teacher = &catalog.teachers()[1];
        let json = serde_json::to_string(teacher).expect("serializable");
        let back: Teacher = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(&back, teacher);
    }

    #[test]
    fn test_rows_resolve_names() {
        let catalog = catalog();
        let s = Schedule::from_genes(vec![Gene::new(1, 1, 0), Gene::new(0, 0, 0)]);
        let rows: Vec<String> = s.rows(&catalog).map(|r| r.to_string()).collect();
        assert_eq!(
            rows,
            vec![
                "Timeslot 1: Chemistry, Mary, A".to_string(),
                "Timeslot 2: Physics, Tom, A".to_string(),
            ]
        );
    }
}
