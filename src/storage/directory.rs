//! An in-memory store of students, professors and courses
//!
//! The [`Directory`] is the single source of truth for a session. It is
//! created empty, owned by whoever drives the session, and lent to the
//! services for each operation. It is never written anywhere.

use crate::domain::{Course, Professor, Student};

/// All students, professors and courses known to a session.
///
/// Each collection keeps insertion order. The directory itself enforces no
/// invariants; uniqueness of names is the business of
/// [`UserService`](crate::UserService).
#[derive(Debug, Default, Clone)]
pub struct Directory {
    students: Vec<Student>,
    professors: Vec<Professor>,
    courses: Vec<Course>,
}

impl Directory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All students, in the order they were added.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// All professors, in the order they were added.
    pub fn professors(&self) -> impl Iterator<Item = &Professor> {
        self.professors.iter()
    }

    /// All courses, in the order they were added.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub(crate) const fn students_mut(&mut self) -> &mut Vec<Student> {
        &mut self.students
    }

    pub(crate) const fn professors_mut(&mut self) -> &mut Vec<Professor> {
        &mut self.professors
    }

    pub(crate) const fn courses_mut(&mut self) -> &mut Vec<Course> {
        &mut self.courses
    }
}
