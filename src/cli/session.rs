//! Role selection, the entry point of an interactive session.

use std::fmt;

use registry::{Config, Directory, Professor, Student};
use tracing::instrument;

use super::{
    admin, professor,
    prompt::{Prompt, choose, choose_name},
    student,
    terminal::Colorize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Admin,
    Professor,
    Student,
    Quit,
}

impl Role {
    const ALL: [Self; 4] = [Self::Admin, Self::Professor, Self::Student, Self::Quit];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Admin => "Admin",
            Self::Professor => "Professor",
            Self::Student => "Student",
            Self::Quit => "Quit",
        })
    }
}

/// Runs role selection until the user quits.
///
/// Backing out of role selection also ends the session.
#[instrument(skip_all)]
pub fn run<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
    config: &Config,
) -> anyhow::Result<()> {
    loop {
        match choose(prompt, "Select role", &Role::ALL)? {
            Some(Role::Admin) => login_admin(prompt, directory, config)?,
            Some(Role::Professor) => login_professor(prompt, directory)?,
            Some(Role::Student) => login_student(prompt, directory)?,
            Some(Role::Quit) | None => break,
        }
    }
    tracing::debug!("session ended");
    Ok(())
}

fn login_admin<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
    config: &Config,
) -> anyhow::Result<()> {
    let username = prompt.input("Username")?;
    let password = prompt.password("Password")?;

    if config.credentials_match(&username, &password) {
        tracing::info!(%username, "admin logged in");
        admin::run(prompt, directory)
    } else {
        tracing::warn!(%username, "rejected admin login");
        prompt.show(&"Invalid credentials".warning());
        Ok(())
    }
}

fn login_professor<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
) -> anyhow::Result<()> {
    let names: Vec<String> = directory
        .professors()
        .map(Professor::name)
        .map(String::from)
        .collect();
    if names.is_empty() {
        prompt.show(&"No professors registered yet".dim());
        return Ok(());
    }

    if let Some(name) = choose_name(prompt, "Select professor", names)? {
        professor::run(prompt, directory, &name)?;
    }
    Ok(())
}

fn login_student<P: Prompt + ?Sized>(
    prompt: &mut P,
    directory: &mut Directory,
) -> anyhow::Result<()> {
    let names: Vec<String> = directory
        .students()
        .map(Student::name)
        .map(String::from)
        .collect();
    if names.is_empty() {
        prompt.show(&"No students registered yet".dim());
        return Ok(());
    }

    let Some(name) = choose_name(prompt, "Select student", names)? else {
        return Ok(());
    };
    let student = registry::UserService::new(directory)
        .get_student_by_name(&name)
        .cloned();
    match student {
        Some(student) => student::run(prompt, directory, &student),
        None => {
            prompt.show(&format!("Student {name} not found").warning());
            Ok(())
        }
    }
}
