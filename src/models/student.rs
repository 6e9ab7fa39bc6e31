//! Student and roster models.
//!
//! The roster is the ordered list of students taking part in the rotation.
//! Identifiers are assigned 1..N in entry order and never change afterwards;
//! partitioning relies on that order being stable.

use serde::{Deserialize, Serialize};

/// Student identifier (1-based position in the roster).
pub type StudentId = u32;

/// A student in the cohort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Roster position, starting at 1.
    pub id: StudentId,
    /// Display name.
    pub name: String,
}

/// Ordered, immutable list of students.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Builds a roster from display names, assigning ids 1..N in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let students = names
            .into_iter()
            .zip(1..)
            .map(|(name, id)| Student {
                id,
                name: name.into(),
            })
            .collect();
        Self { students }
    }

    /// Builds a roster of `size` students named "Student 1".."Student N".
    pub fn anonymous(size: usize) -> Self {
        Self::new((1..=size).map(|i| format!("Student {i}")))
    }

    /// Number of students.
    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster has no students.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Students in roster order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Student ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.students.iter().map(|s| s.id)
    }

    /// Looks up a student by id.
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        // ids are dense and 1-based
        let idx = usize::try_from(id).ok()?.checked_sub(1)?;
        self.students.get(idx)
    }
}
