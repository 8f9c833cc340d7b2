//! Plain-text views of the directory.

use std::fmt::Display;

use registry::{Course, Directory, Professor, Student};

/// Formats items as `[a, b, c]`.
fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Everything in the directory, by name.
pub fn overview(directory: &Directory) -> String {
    format!(
        "Students: {}\nProfessors: {}\nCourses: {}",
        bracketed(directory.students().map(Student::name)),
        bracketed(directory.professors().map(Professor::name)),
        bracketed(directory.courses().map(Course::name)),
    )
}

/// Each course with its enrolled students, separated by blank lines.
pub fn rosters(courses: &[&Course]) -> String {
    courses
        .iter()
        .map(|course| {
            format!(
                "Course: {}\nStudents: {}",
                course.name(),
                bracketed(course.enrolled_students().iter().map(Student::name))
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The courses a student is enrolled in.
pub fn enrollment(courses: &[&Course]) -> String {
    format!("Enrolled:\n{}", bracketed(courses.iter().map(|c| c.name())))
}

#[cfg(test)]
mod tests {
    use registry::{CourseService, UserService};

    use super::*;

    #[test]
    fn empty_overview() {
        assert_eq!(
            overview(&Directory::new()),
            "Students: []\nProfessors: []\nCourses: []"
        );
    }

    #[test]
    fn overview_lists_names_in_insertion_order() {
        let mut directory = Directory::new();
        let mut users = UserService::new(&mut directory);
        users.add_student("Bob");
        users.add_student("Alice");
        users.add_professor("Smith");
        CourseService::new(&mut directory).add_course("CS101", "Smith");

        assert_eq!(
            overview(&directory),
            "Students: [Bob, Alice]\nProfessors: [Smith]\nCourses: [CS101]"
        );
    }

    #[test]
    fn rosters_show_each_course() {
        let mut cs101 = Course::new("CS101", "Smith");
        cs101.enroll(Student::new("Alice"));
        cs101.enroll(Student::new("Bob"));
        let cs102 = Course::new("CS102", "Smith");

        assert_eq!(
            rosters(&[&cs101, &cs102]),
            "Course: CS101\nStudents: [Alice, Bob]\n\nCourse: CS102\nStudents: []"
        );
        assert_eq!(rosters(&[]), "");
    }

    #[test]
    fn enrollment_lists_course_names() {
        let cs101 = Course::new("CS101", "Smith");

        assert_eq!(enrollment(&[&cs101]), "Enrolled:\n[CS101]");
        assert_eq!(enrollment(&[]), "Enrolled:\n[]");
    }
}
