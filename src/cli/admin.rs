//! The admin dashboard: manage students, professors and courses.

use std::fmt;

use registry::{CourseService, Directory, Professor, UserService};
use tracing::instrument;

use super::{
    prompt::{Prompt, choose, choose_name},
    render,
    terminal::Colorize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AddStudent,
    AddProfessor,
    AddCourse,
    ViewAll,
    DeleteUser,
    Logout,
}

impl Action {
    const ALL: [Self; 6] = [
        Self::AddStudent,
        Self::AddProfessor,
        Self::AddCourse,
        Self::ViewAll,
        Self::DeleteUser,
        Self::Logout,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AddStudent => "Add Student",
            Self::AddProfessor => "Add Professor",
            Self::AddCourse => "Add Course",
            Self::ViewAll => "View All",
            Self::DeleteUser => "Delete User",
            Self::Logout => "Logout",
        })
    }
}

#[instrument(skip_all)]
pub fn run<P: Prompt + ?Sized>(prompt: &mut P, directory: &mut Directory) -> anyhow::Result<()> {
    prompt.show(&"Admin Dashboard".heading());
    loop {
        match choose(prompt, "Choose an action", &Action::ALL)? {
            Some(Action::AddStudent) => add_student(prompt, directory)?,
            Some(Action::AddProfessor) => add_professor(prompt, directory)?,
            Some(Action::AddCourse) => add_course(prompt, directory)?,
            Some(Action::ViewAll) => prompt.show(&render::overview(directory)),
            Some(Action::DeleteUser) => delete_user(prompt, directory)?,
            Some(Action::Logout) | None => return Ok(()),
        }
    }
}

fn add_student<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
) -> anyhow::Result<()> {
    let name = prompt.input("Student name")?;
    if name.trim().is_empty() {
        return Ok(());
    }

    let mut users = UserService::new(directory);
    if users.get_student_by_name(&name).is_some() {
        prompt.show(&format!("ℹ️  Student {name} already exists").dim());
    } else {
        users.add_student(&name);
        prompt.show(&format!("✅ Added student {name}").success());
    }
    Ok(())
}

fn add_professor<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
) -> anyhow::Result<()> {
    let name = prompt.input("Professor name")?;
    if name.trim().is_empty() {
        return Ok(());
    }

    let mut users = UserService::new(directory);
    if users.get_professor_by_name(&name).is_some() {
        prompt.show(&format!("ℹ️  Professor {name} already exists").dim());
    } else {
        users.add_professor(&name);
        prompt.show(&format!("✅ Added professor {name}").success());
    }
    Ok(())
}

fn add_course<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
) -> anyhow::Result<()> {
    let professors: Vec<String> = directory
        .professors()
        .map(Professor::name)
        .map(String::from)
        .collect();
    if professors.is_empty() {
        prompt.show(&"⚠️  Add a professor before adding courses".warning());
        return Ok(());
    }

    let name = prompt.input("Course name")?;
    if name.trim().is_empty() {
        return Ok(());
    }
    let Some(professor) = choose_name(prompt, "Assign professor", professors)? else {
        return Ok(());
    };

    CourseService::new(directory).add_course(&name, &professor);
    prompt.show(&format!("✅ Added course {name} ({professor})").success());
    Ok(())
}

/// Deletes both a student and a professor with the given name.
fn delete_user<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
) -> anyhow::Result<()> {
    let name = prompt.input("Name to delete")?;
    if name.trim().is_empty() {
        return Ok(());
    }

    let mut users = UserService::new(directory);
    let existed =
        users.get_student_by_name(&name).is_some() || users.get_professor_by_name(&name).is_some();
    users.delete_student(&name);
    users.delete_professor(&name);

    if existed {
        prompt.show(&format!("✅ Deleted {name}").success());
    } else {
        prompt.show(&format!("ℹ️  No user named {name}").dim());
    }
    Ok(())
}
