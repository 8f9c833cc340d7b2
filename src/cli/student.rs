//! The student dashboard: view, enroll in and leave courses.

use std::fmt;

use registry::{Course, CourseService, Directory, Student};
use tracing::instrument;

use super::{
    prompt::{Prompt, choose, choose_name},
    render,
    terminal::Colorize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    MyCourses,
    Enroll,
    Unenroll,
    Logout,
}

impl Action {
    const ALL: [Self; 4] = [Self::MyCourses, Self::Enroll, Self::Unenroll, Self::Logout];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MyCourses => "My Courses",
            Self::Enroll => "Enroll",
            Self::Unenroll => "Unenroll",
            Self::Logout => "Logout",
        })
    }
}

#[instrument(skip(prompt, directory, student), fields(student = student.name()))]
pub fn run<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
    student: &Student,
) -> anyhow::Result<()> {
    prompt.show(&format!("Student Dashboard: {student}").heading());
    loop {
        match choose(prompt, "Choose an action", &Action::ALL)? {
            Some(Action::MyCourses) => {
                let service = CourseService::new(directory);
                let courses = service.get_courses_by_student(student);
                prompt.show(&render::enrollment(&courses));
            }
            Some(Action::Enroll) => {
                if let Some(course) = pick_course(prompt, directory)? {
                    CourseService::new(directory).enroll_student(&course, student);
                    prompt.show(&format!("✅ Enrolled in {course}").success());
                }
            }
            Some(Action::Unenroll) => {
                if let Some(course) = pick_course(prompt, directory)? {
                    CourseService::new(directory).unenroll_student(&course, student);
                    prompt.show(&format!("✅ Left {course}").success());
                }
            }
            Some(Action::Logout) | None => return Ok(()),
        }
    }
}

/// Offers every course name in the directory, duplicates included.
fn pick_course<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &Directory,
) -> anyhow::Result<Option<String>> {
    let names: Vec<String> = directory
        .courses()
        .map(Course::name)
        .map(String::from)
        .collect();
    if names.is_empty() {
        prompt.show(&"No courses available".dim());
        return Ok(None);
    }
    choose_name(prompt, "Select course", names)
}
