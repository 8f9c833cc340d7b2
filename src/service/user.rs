use tracing::instrument;

use crate::{
    domain::{Professor, Student, names_match},
    storage::Directory,
};

/// Creates, finds and deletes students and professors.
///
/// All lookups compare names case-insensitively. Adding a name that already
/// exists, or deleting one that does not, is a silent no-op.
#[derive(Debug)]
pub struct UserService<'d> {
    directory: &'d mut Directory,
}

impl<'d> UserService<'d> {
    /// Borrows the directory for the lifetime of the service.
    #[must_use]
    pub const fn new(directory: &'d mut Directory) -> Self {
        Self { directory }
    }

    /// Adds a student, unless one with the same name already exists.
    #[instrument(skip(self))]
    pub fn add_student(&mut self, name: &str) {
        if self.get_student_by_name(name).is_some() {
            tracing::debug!("student already exists");
            return;
        }
        self.directory.students_mut().push(Student::new(name));
        tracing::info!("added student");
    }

    /// Adds a professor, unless one with the same name already exists.
    #[instrument(skip(self))]
    pub fn add_professor(&mut self, name: &str) {
        if self.get_professor_by_name(name).is_some() {
            tracing::debug!("professor already exists");
            return;
        }
        self.directory.professors_mut().push(Professor::new(name));
        tracing::info!("added professor");
    }

    /// Finds the first student whose name matches.
    #[must_use]
    pub fn get_student_by_name(&self, name: &str) -> Option<&Student> {
        self.directory
            .students()
            .find(|student| names_match(student.name(), name))
    }

    /// Finds the first professor whose name matches.
    #[must_use]
    pub fn get_professor_by_name(&self, name: &str) -> Option<&Professor> {
        self.directory
            .professors()
            .find(|professor| names_match(professor.name(), name))
    }

    /// Removes every student whose name matches.
    ///
    /// Courses the student was enrolled in are left as they are.
    #[instrument(skip(self))]
    pub fn delete_student(&mut self, name: &str) {
        let students = self.directory.students_mut();
        let before = students.len();
        students.retain(|student| !names_match(student.name(), name));

        match before - students.len() {
            0 => tracing::debug!("no matching student"),
            removed => tracing::info!(removed, "deleted student"),
        }
    }

    /// Removes every professor whose name matches.
    ///
    /// Courses naming the professor are left as they are.
    #[instrument(skip(self))]
    pub fn delete_professor(&mut self, name: &str) {
        let professors = self.directory.professors_mut();
        let before = professors.len();
        professors.retain(|professor| !names_match(professor.name(), name));

        match before - professors.len() {
            0 => tracing::debug!("no matching professor"),
            removed => tracing::info!(removed, "deleted professor"),
        }
    }
}
