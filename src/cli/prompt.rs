//! Interactive prompts used by `create` when values are missing.

use crate::{constants::CURRENT_DIRECTORY_ARG, error::Result, validation::validate_project_name};
use dialoguer::{Confirm, Input, Select};

/// Terminal interaction needed by the create flow.
pub trait Prompter {
    /// Returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;
    /// Asks for a project name; `.` is accepted for the output directory.
    fn project_name(&self, prompt: &str) -> Result<String>;
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Dialoguer-based implementation of [`Prompter`].
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).items(items).default(0).interact()?)
    }

    fn project_name(&self, prompt: &str) -> Result<String> {
        let name: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                if input == CURRENT_DIRECTORY_ARG {
                    return Ok(());
                }
                validate_project_name(input).map_err(|e| match e {
                    crate::error::Error::InvalidProjectName { reason, .. } => reason,
                    other => other.to_string(),
                })
            })
            .interact_text()?;
        Ok(name)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}
