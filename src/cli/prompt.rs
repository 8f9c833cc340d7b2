//! The seam between dashboards and the terminal.
//!
//! Dashboards never touch stdin or stdout directly. They ask a [`Prompt`] for
//! input and hand it text to show, so that whole sessions can be driven from
//! tests.

use std::fmt::Display;

use anyhow::Context;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

pub trait Prompt {
    /// Asks the user to pick one of `items`.
    ///
    /// Returns `None` if the user backs out of the selection.
    fn select(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<Option<usize>>;

    /// Asks for a line of text. The answer may be empty.
    fn input(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Asks for a line of text without echoing it.
    fn password(&mut self, prompt: &str) -> anyhow::Result<String>;

    /// Shows text to the user.
    fn show(&mut self, text: &str);
}

/// Picks one of a fixed set of options, returning the option itself.
pub fn choose<P, T>(prompt: &mut P, title: &str, options: &[T]) -> anyhow::Result<Option<T>>
where
    P: Prompt + ?Sized,
    T: Copy + Display,
{
    let items: Vec<String> = options.iter().map(ToString::to_string).collect();
    Ok(prompt
        .select(title, &items)?
        .and_then(|index| options.get(index).copied()))
}

/// Picks one of a list of names, returning the chosen name.
pub fn choose_name<P>(
    prompt: &mut P,
    title: &str,
    names: Vec<String>,
) -> anyhow::Result<Option<String>>
where
    P: Prompt + ?Sized,
{
    let index = prompt.select(title, &names)?;
    Ok(index.and_then(|index| names.into_iter().nth(index)))
}

/// A [`Prompt`] on the user's terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn select(&mut self, prompt: &str, items: &[String]) -> anyhow::Result<Option<usize>> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .context("failed to read selection")
    }

    fn input(&mut self, prompt: &str) -> anyhow::Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("failed to read input")
    }

    fn password(&mut self, prompt: &str) -> anyhow::Result<String> {
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .context("failed to read password")
    }

    fn show(&mut self, text: &str) {
        println!("{text}");
    }
}
