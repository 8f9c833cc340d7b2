use crate::domain::Student;

/// A course taught by a named professor.
///
/// The professor is recorded by name only. Nothing ties it to a
/// [`Professor`](crate::Professor) in the directory, so the name may refer to
/// a professor that never existed or has since been deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    professor_name: String,
    /// Enrolled students, in enrollment order. Never contains the same
    /// student twice.
    enrolled: Vec<Student>,
}

impl Course {
    /// Creates a course with no enrolled students.
    #[must_use]
    pub fn new(name: impl Into<String>, professor_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            professor_name: professor_name.into(),
            enrolled: Vec::new(),
        }
    }

    /// The course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the professor teaching the course.
    #[must_use]
    pub fn professor_name(&self) -> &str {
        &self.professor_name
    }

    /// The students enrolled in this course, in the order they enrolled.
    #[must_use]
    pub fn enrolled_students(&self) -> &[Student] {
        &self.enrolled
    }

    /// Returns `true` if this exact student is enrolled.
    #[must_use]
    pub fn is_enrolled(&self, student: &Student) -> bool {
        self.enrolled.iter().any(|s| s.is(student))
    }

    /// Adds a student to the course.
    ///
    /// Returns `false` if the student was already enrolled.
    pub fn enroll(&mut self, student: Student) -> bool {
        if self.is_enrolled(&student) {
            false
        } else {
            self.enrolled.push(student);
            true
        }
    }

    /// Removes a student from the course.
    ///
    /// Returns `false` if the student was not enrolled.
    pub fn remove(&mut self, student: &Student) -> bool {
        let before = self.enrolled.len();
        self.enrolled.retain(|s| !s.is(student));
        self.enrolled.len() != before
    }
}
