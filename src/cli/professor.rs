//! The professor dashboard: rosters of the professor's own courses.

use std::fmt;

use registry::{CourseService, Directory};
use tracing::instrument;

use super::{
    prompt::{Prompt, choose},
    render,
    terminal::Colorize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ViewCourses,
    Logout,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ViewCourses => "View My Courses",
            Self::Logout => "Logout",
        })
    }
}

/// Runs the dashboard for the named professor.
///
/// The name is used as given; it need not belong to a registered professor.
#[instrument(skip(prompt, directory))]
pub fn run<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
    name: &str,
) -> anyhow::Result<()> {
    prompt.show(&format!("Professor Dashboard: {name}").heading());
    loop {
        match choose(prompt, "Choose an action", &[Action::ViewCourses, Action::Logout])? {
            Some(Action::ViewCourses) => {
                let service = CourseService::new(directory);
                let courses = service.get_courses_by_professor(name);
                if courses.is_empty() {
                    prompt.show(&"No courses assigned".dim());
                } else {
                    prompt.show(&render::rosters(&courses));
                }
            }
            Some(Action::Logout) | None => return Ok(()),
        }
    }
}
