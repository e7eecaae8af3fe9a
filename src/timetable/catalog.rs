//! Problem catalog: subjects, teachers, groups, and the timeslot count.
//!
//! A [`Catalog`] is validated once at construction and is read-only for the
//! lifetime of a search. Subjects are identified by their index in the
//! subject list; teacher competencies and group requirements are
//! membership sets sized to the subject count.

use crate::error::{Error, Result};

/// A teacher with subject competencies and a teaching-hours cap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Teacher {
    /// Display name.
    pub name: String,
    /// `competencies[s]` is true when the teacher can teach subject `s`.
    pub competencies: Vec<bool>,
    /// Maximum number of timeslots this teacher may hold in one schedule.
    pub max_hours: usize,
}

impl Teacher {
    /// Creates a teacher.
    pub fn new(name: impl Into<String>, competencies: impl Into<Vec<bool>>, max_hours: usize) -> Self {
        Self {
            name: name.into(),
            competencies: competencies.into(),
            max_hours,
        }
    }

    /// Returns true if the teacher can teach `subject`.
    pub fn knows(&self, subject: usize) -> bool {
        self.competencies.get(subject).copied().unwrap_or(false)
    }
}

/// A student group with the set of subjects it studies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Display name.
    pub name: String,
    /// `subjects[s]` is true when the group requires subject `s`.
    pub subjects: Vec<bool>,
}

impl Group {
    /// Creates a group.
    pub fn new(name: impl Into<String>, subjects: impl Into<Vec<bool>>) -> Self {
        Self {
            name: name.into(),
            subjects: subjects.into(),
        }
    }

    /// Returns true if the group requires `subject`.
    pub fn requires(&self, subject: usize) -> bool {
        self.subjects.get(subject).copied().unwrap_or(false)
    }
}

/// Immutable, validated input to a timetable search.
///
/// # Example
///
/// ```
/// use u_timetable::timetable::{Catalog, Group, Teacher};
///
/// let catalog = Catalog::new(
///     vec!["Physics".into(), "Chemistry".into()],
///     vec![Teacher::new("Tom", [true, false], 3)],
///     vec![Group::new("A", [true, true])],
///     4,
/// )
/// .unwrap();
/// assert_eq!(catalog.subject_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    subjects: Vec<String>,
    teachers: Vec<Teacher>,
    groups: Vec<Group>,
    timeslots: usize,
}

impl Catalog {
    /// Builds a catalog, rejecting input that would make the search degenerate.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] when any list is empty, `timeslots`
    /// is zero, or a competency/requirement set is not sized to the subject
    /// count.
    pub fn new(
        subjects: Vec<String>,
        teachers: Vec<Teacher>,
        groups: Vec<Group>,
        timeslots: usize,
    ) -> Result<Self> {
        if subjects.is_empty() {
            return Err(Error::invalid("catalog needs at least one subject"));
        }
        if teachers.is_empty() {
            return Err(Error::invalid("catalog needs at least one teacher"));
        }
        if groups.is_empty() {
            return Err(Error::invalid("catalog needs at least one group"));
        }
        if timeslots == 0 {
            return Err(Error::invalid("timeslot count must be at least 1"));
        }

        let n = subjects.len();
        if let Some(t) = teachers.iter().find(|t| t.competencies.len() != n) {
            return Err(Error::invalid(format!(
                "teacher '{}' has {} competency flags, expected {n}",
                t.name,
                t.competencies.len()
            )));
        }
        if let Some(g) = groups.iter().find(|g| g.subjects.len() != n) {
            return Err(Error::invalid(format!(
                "group '{}' has {} subject flags, expected {n}",
                g.name,
                g.subjects.len()
            )));
        }

        Ok(Self {
            subjects,
            teachers,
            groups,
            timeslots,
        })
    }

    /// Subject names, indexed by subject id.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Teachers, indexed by teacher id.
    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    /// Groups, indexed by group id.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of subjects.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Number of teachers.
    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of timeslots every schedule fills.
    pub fn timeslots(&self) -> usize {
        self.timeslots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("S{i}")).collect()
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = Catalog::new(
            subjects(3),
            vec![Teacher::new("T", [true, false, true], 2)],
            vec![Group::new("G", [false, true, true])],
            5,
        )
        .expect("valid catalog");

        assert_eq!(catalog.subject_count(), 3);
        assert_eq!(catalog.teacher_count(), 1);
        assert_eq!(catalog.group_count(), 1);
        assert_eq!(catalog.timeslots(), 5);
        assert!(catalog.teachers()[0].knows(2));
        assert!(!catalog.teachers()[0].knows(1));
        assert!(catalog.groups()[0].requires(1));
        assert!(!catalog.groups()[0].requires(0));
    }

    #[test]
    fn test_out_of_range_subject_is_unknown() {
        let teacher = Teacher::new("T", [true], 1);
        assert!(!teacher.knows(5));
        let group = Group::new("G", [true]);
        assert!(!group.requires(5));
    }

    #[test]
    fn test_rejects_empty_subjects() {
        let err = Catalog::new(
            Vec::new(),
            vec![Teacher::new("T", Vec::<bool>::new(), 1)],
            vec![Group::new("G", Vec::<bool>::new())],
            1,
        );
        assert!(matches!(err, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_empty_teachers() {
        let err = Catalog::new(subjects(1), Vec::new(), vec![Group::new("G", [true])], 1);
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_empty_groups() {
        let err = Catalog::new(subjects(1), vec![Teacher::new("T", [true], 1)], Vec::new(), 1);
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_zero_timeslots() {
        let err = Catalog::new(
            subjects(1),
            vec![Teacher::new("T", [true], 1)],
            vec![Group::new("G", [true])],
            0,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_missized_competencies() {
        let err = Catalog::new(
            subjects(2),
            vec![Teacher::new("Tom", [true], 1)],
            vec![Group::new("G", [true, false])],
            3,
        );
        assert_eq!(
            err,
            Err(Error::InvalidConfiguration(
                "teacher 'Tom' has 1 competency flags, expected 2".into()
            ))
        );
    }

    #[test]
    fn test_rejects_missized_requirements() {
        let err = Catalog::new(
            subjects(2),
            vec![Teacher::new("T", [true, true], 1)],
            vec![Group::new("B", [true, false, true])],
            3,
        );
        assert!(err.is_err());
    }
}
