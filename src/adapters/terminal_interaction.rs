//! Terminal prompts using dialoguer.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::{AppError, VersionSource};
use crate::ports::{Interaction, Status};

const SOURCE_ITEMS: [&str; 2] = ["Custom version", "Latest WordPress version"];

/// Interactive terminal implementation of [`Interaction`].
#[derive(Debug, Clone)]
pub struct TerminalInteraction {
    field_key: String,
}

impl TerminalInteraction {
    pub fn new(field_key: impl Into<String>) -> Self {
        Self { field_key: field_key.into() }
    }
}

fn cancelled_or<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read {}: {}", what, err))),
    }
}

impl Interaction for TerminalInteraction {
    fn confirm_plugin_root(&self) -> Result<Option<bool>, AppError> {
        let answer = Confirm::new()
            .with_prompt(
                "Are you running this in the root directory of your WordPress plugin's repository?",
            )
            .default(true)
            .interact_opt();
        cancelled_or(answer, "confirmation").map(Option::flatten)
    }

    fn choose_source(&self) -> Result<Option<VersionSource>, AppError> {
        let selection = Select::new()
            .with_prompt(format!(
                "Define a custom \"{}\" version or set to the latest WordPress version?",
                self.field_key
            ))
            .items(&SOURCE_ITEMS)
            .default(0)
            .interact_opt();

        Ok(cancelled_or(selection, "version source")?.flatten().map(|index| match index {
            0 => VersionSource::Custom,
            _ => VersionSource::Latest,
        }))
    }

    fn input_version(
        &self,
        initial: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<Option<String>, AppError> {
        let value = Input::<String>::new()
            .with_prompt(format!("Define the custom \"{}\" version", self.field_key))
            .with_initial_text(initial)
            .validate_with(|input: &String| validate(input))
            .interact_text();
        cancelled_or(value, "version")
    }

    fn report(&self, status: &Status) {
        match status {
            Status::Current(value) => {
                println!("✔ CURRENT version of \"{}\": {}", self.field_key, value);
            }
            Status::Latest(value) => println!("✔ LATEST WordPress version: {}", value),
            Status::Updated(value) => {
                println!("✅ UPDATED \"{}\" version to: {}", self.field_key, value);
            }
        }
    }
}
