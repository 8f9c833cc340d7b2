use tracing::instrument;

use crate::{
    domain::{Course, Student, names_match},
    storage::Directory,
};

/// Creates courses, answers enrollment queries, and enrolls students.
///
/// Courses are addressed by name, case-insensitively. Course names are not
/// unique, so an enrollment change applies to every course with the given
/// name.
#[derive(Debug)]
pub struct CourseService<'d> {
    directory: &'d mut Directory,
}

impl<'d> CourseService<'d> {
    /// Borrows the directory for the lifetime of the service.
    #[must_use]
    pub const fn new(directory: &'d mut Directory) -> Self {
        Self { directory }
    }

    /// Adds a course.
    ///
    /// A new course is always created, even if one with the same name exists
    /// or the professor is unknown.
    #[instrument(skip(self))]
    pub fn add_course(&mut self, name: &str, professor_name: &str) {
        self.directory
            .courses_mut()
            .push(Course::new(name, professor_name));
        tracing::info!("added course");
    }

    /// All courses taught by the named professor, in the order they were
    /// added.
    #[must_use]
    pub fn get_courses_by_professor(&self, name: &str) -> Vec<&Course> {
        self.directory
            .courses()
            .filter(|course| names_match(course.professor_name(), name))
            .collect()
    }

    /// All courses the given student is enrolled in, in the order they were
    /// added.
    #[must_use]
    pub fn get_courses_by_student(&self, student: &Student) -> Vec<&Course> {
        self.directory
            .courses()
            .filter(|course| course.is_enrolled(student))
            .collect()
    }

    /// Enrolls a student in every course with a matching name.
    ///
    /// The student need not be in the directory.
    #[instrument(skip(self, student), fields(student = student.name()))]
    pub fn enroll_student(&mut self, course_name: &str, student: &Student) {
        let mut matched = 0_usize;
        for course in self.matching_courses(course_name) {
            matched += 1;
            if !course.enroll(student.clone()) {
                tracing::debug!("student already enrolled");
            }
        }

        if matched == 0 {
            tracing::debug!("no matching course");
        } else {
            tracing::info!(courses = matched, "enrolled student");
        }
    }

    /// Removes a student from every course with a matching name.
    #[instrument(skip(self, student), fields(student = student.name()))]
    pub fn unenroll_student(&mut self, course_name: &str, student: &Student) {
        let mut matched = 0_usize;
        for course in self.matching_courses(course_name) {
            matched += 1;
            if !course.remove(student) {
                tracing::debug!("student was not enrolled");
            }
        }

        if matched == 0 {
            tracing::debug!("no matching course");
        } else {
            tracing::info!(courses = matched, "unenrolled student");
        }
    }

    fn matching_courses<'a>(&'a mut self, name: &'a str) -> impl Iterator<Item = &'a mut Course> {
        self.directory
            .courses_mut()
            .iter_mut()
            .filter(move |course| names_match(course.name(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserService;

    fn course_names(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn add_course_never_deduplicates() {
        let mut directory = Directory::new();
        let mut courses = CourseService::new(&mut directory);

        courses.add_course("CS101", "Smith");
        courses.add_course("cs101", "Smith");
        courses.add_course("CS101", "Nobody");

        assert_eq!(directory.courses().count(), 3);
    }

    #[test]
    fn courses_by_professor_keep_insertion_order() {
        let mut directory = Directory::new();
        let mut courses = CourseService::new(&mut directory);
        courses.add_course("CS301", "Dr. Smith");
        courses.add_course("MA101", "Dr. Smyth");
        courses.add_course("CS101", "dr. smith");
        courses.add_course("CS201", "Dr. Smith ");

        let found = courses.get_courses_by_professor("Dr. Smith");

        assert_eq!(course_names(&found), ["CS301", "CS101"]);
    }

    #[test]
    fn courses_by_professor_match_final_sigma() {
        let mut directory = Directory::new();
        let alice = Student::new("Alice");
        let mut courses = CourseService::new(&mut directory);
        courses.add_course("ΦΥΣΙΚΗ", "ΝΙΚΟΣ");

        assert_eq!(course_names(&courses.get_courses_by_professor("νικος")), ["ΦΥΣΙΚΗ"]);

        courses.enroll_student("φυσικη", &alice);
        assert_eq!(course_names(&courses.get_courses_by_student(&alice)), ["ΦΥΣΙΚΗ"]);
    }

    #[test]
    fn courses_by_professor_for_unknown_name_is_empty() {
        let mut directory = Directory::new();
        let mut courses = CourseService::new(&mut directory);
        courses.add_course("CS101", "Smith");

        assert!(courses.get_courses_by_professor("Jones").is_empty());
    }

    #[test]
    fn enroll_then_unenroll_round_trips() {
        let mut directory = Directory::new();
        let alice = Student::new("Alice");
        let mut courses = CourseService::new(&mut directory);
        courses.add_course("CS101", "Smith");
        courses.add_course("CS102", "Smith");

        courses.enroll_student("cs101", &alice);
        assert_eq!(course_names(&courses.get_courses_by_student(&alice)), ["CS101"]);

        courses.unenroll_student("CS101", &alice);
        assert!(courses.get_courses_by_student(&alice).is_empty());
    }

    #[test]
    fn enroll_applies_to_every_course_with_the_name() {
        let mut directory = Directory::new();
        let alice = Student::new("Alice");
        let mut courses = CourseService::new(&mut directory);
        courses.add_course("CS101", "Smith");
        courses.add_course("Art", "Jones");
        courses.add_course("cs101", "Jones");

        courses.enroll_student("CS101", &alice);

        let enrolled = courses.get_courses_by_student(&alice);
        assert_eq!(enrolled.len(), 2);
        assert_eq!(enrolled[0].professor_name(), "Smith");
        assert_eq!(enrolled[1].professor_name(), "Jones");

        courses.unenroll_student("CS101", &alice);
        assert!(courses.get_courses_by_student(&alice).is_empty());
    }

    #[test]
    fn enroll_twice_keeps_one_membership() {
        let mut directory = Directory::new();
        let alice = Student::new("Alice");
        let mut courses = CourseService::new(&mut directory);
        courses.add_course("CS101", "Smith");

        courses.enroll_student("CS101", &alice);
        courses.enroll_student("CS101", &alice);

        let course = directory.courses().next().unwrap();
        assert_eq!(course.enrolled_students().len(), 1);
    }

    #[test]
    fn enroll_in_unknown_course_is_a_no_op() {
        let mut directory = Directory::new();
        let alice = Student::new("Alice");
        let mut courses = CourseService::new(&mut directory);
        courses.add_course("CS101", "Smith");

        courses.enroll_student("CS999", &alice);
        courses.unenroll_student("CS999", &alice);

        assert!(courses.get_courses_by_student(&alice).is_empty());
        assert!(directory.courses().all(|c| c.enrolled_students().is_empty()));
    }

    #[test]
    fn deleting_a_student_leaves_enrollment_in_place() {
        let mut directory = Directory::new();
        let mut users = UserService::new(&mut directory);
        users.add_student("Alice");
        let alice = users.get_student_by_name("Alice").cloned().unwrap();

        let mut courses = CourseService::new(&mut directory);
        courses.add_course("CS101", "Smith");
        courses.enroll_student("CS101", &alice);

        UserService::new(&mut directory).delete_student("Alice");

        let courses = CourseService::new(&mut directory);
        assert_eq!(course_names(&courses.get_courses_by_student(&alice)), ["CS101"]);
    }

    #[test]
    fn namesake_does_not_inherit_enrollment() {
        let mut directory = Directory::new();
        let original = Student::new("Alice");
        let namesake = Student::new("Alice");
        let mut courses = CourseService::new(&mut directory);
        courses.add_course("CS101", "Smith");

        courses.enroll_student("CS101", &original);

        assert!(courses.get_courses_by_student(&namesake).is_empty());
    }
}
