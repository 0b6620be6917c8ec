//! Terminal front end: form prompts, wizard screens, resource listings.

pub mod commands;
pub mod render;
pub mod wizard;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use crate::error::ConsoleError;

/// Navigation choice at the bottom of a wizard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Back,
    Submit,
    /// Fill the current step again.
    Edit,
    Quit,
}

/// Raw prompt primitives the console is built on.
///
/// The terminal implementation is [`DialoguerPrompter`]; tests swap in a
/// scripted one.
pub trait Prompter {
    /// Free text. An empty answer returns `default`.
    fn input(&mut self, label: &str, default: &str) -> Result<String, ConsoleError>;

    /// Hidden text. May be empty.
    fn password(&mut self, label: &str) -> Result<String, ConsoleError>;

    /// Index of the chosen item.
    fn select(&mut self, label: &str, items: &[String], default: usize) -> Result<usize, ConsoleError>;

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, ConsoleError>;
}

/// Interactive prompts on the controlling terminal.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, label: &str, default: &str) -> Result<String, ConsoleError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn password(&mut self, label: &str) -> Result<String, ConsoleError> {
        Password::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .map_err(prompt_error)
    }

    fn select(&mut self, label: &str, items: &[String], default: usize) -> Result<usize, ConsoleError> {
        Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, ConsoleError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

/// A closed or interrupted terminal ends the wizard like EOF does.
fn prompt_error(err: dialoguer::Error) -> ConsoleError {
    let dialoguer::Error::IO(io) = err;
    match io.kind() {
        std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::Interrupted => ConsoleError::Closed,
        _ => ConsoleError::Io(io),
    }
}

/// Form-level prompts for the wizards.
pub struct Console<P = DialoguerPrompter> {
    prompter: P,
}

impl Console<DialoguerPrompter> {
    pub fn terminal() -> Self {
        Self::new(DialoguerPrompter::new())
    }
}

impl<P: Prompter> Console<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Free-text field. An empty answer keeps `current`.
    pub fn ask(&mut self, label: &str, current: &str) -> Result<String, ConsoleError> {
        let answer = self.prompter.input(label, current)?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer.to_string()
        })
    }

    /// Hidden field. An empty answer keeps `current`, which is never shown.
    pub fn ask_secret(&mut self, label: &str, current: &str) -> Result<String, ConsoleError> {
        let answer = if current.is_empty() {
            self.prompter.password(label)?
        } else {
            self.prompter.password(&format!("{label} (blank keeps it)"))?
        };
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }

    /// Pick one of `options` (id, label) and return its id. The cursor
    /// starts on `current` when it is listed.
    pub fn choose(
        &mut self,
        label: &str,
        options: &[(&str, String)],
        current: &str,
    ) -> Result<String, ConsoleError> {
        if options.is_empty() {
            return Ok(current.to_string());
        }
        let items: Vec<String> = options.iter().map(|(_, text)| text.clone()).collect();
        let default = options
            .iter()
            .position(|(id, _)| *id == current)
            .unwrap_or(0);
        let index = self.prompter.select(label, &items, default)?;
        Ok(options
            .get(index)
            .map_or(current, |(id, _)| *id)
            .to_string())
    }

    pub fn confirm(&mut self, label: &str, current: bool) -> Result<bool, ConsoleError> {
        self.prompter.confirm(label, current)
    }

    /// Ask where to go from the current step. The cursor starts on the
    /// forward move.
    pub fn nav(&mut self, first: bool, last: bool) -> Result<Nav, ConsoleError> {
        let moves = nav_options(first, last);
        let items: Vec<String> = moves.iter().map(|(_, text)| text.to_string()).collect();
        let index = self.prompter.select("Continue", &items, 0)?;
        Ok(moves.get(index).map_or(Nav::Edit, |(nav, _)| *nav))
    }
}

fn nav_options(first: bool, last: bool) -> Vec<(Nav, &'static str)> {
    let mut moves = vec![if last {
        (Nav::Submit, "Submit")
    } else {
        (Nav::Next, "Next")
    }];
    if !first {
        moves.push((Nav::Back, "Back"));
    }
    moves.push((Nav::Edit, "Edit this step"));
    moves.push((Nav::Quit, "Quit"));
    moves
}

/// Answers prompts from a fixed script, one line per prompt.
///
/// Selections accept a 1-based number or a case-insensitive label prefix;
/// answers matching neither are skipped. Running out of lines is
/// [`ConsoleError::Closed`].
#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub(crate) fn new(script: &str) -> Self {
        Self {
            answers: script.lines().map(|l| l.trim().to_string()).collect(),
        }
    }

    fn next(&mut self) -> Result<String, ConsoleError> {
        self.answers.pop_front().ok_or(ConsoleError::Closed)
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn input(&mut self, _label: &str, default: &str) -> Result<String, ConsoleError> {
        let answer = self.next()?;
        Ok(if answer.is_empty() { default.to_string() } else { answer })
    }

    fn password(&mut self, _label: &str) -> Result<String, ConsoleError> {
        self.next()
    }

    fn select(&mut self, _label: &str, items: &[String], default: usize) -> Result<usize, ConsoleError> {
        loop {
            let answer = self.next()?;
            if answer.is_empty() {
                return Ok(default);
            }
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=items.len()).contains(&n) {
                    return Ok(n - 1);
                }
                continue;
            }
            let wanted = answer.to_lowercase();
            if let Some(i) = items.iter().position(|i| i.to_lowercase().starts_with(&wanted)) {
                return Ok(i);
            }
        }
    }

    fn confirm(&mut self, _label: &str, default: bool) -> Result<bool, ConsoleError> {
        Ok(match self.next()?.to_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}
