use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::{AppError, VersionSource};
use crate::ports::{Interaction, Status};

/// Interaction fake that replays scripted answers.
///
/// `None` answers model a cancelled prompt. Running out of answers panics,
/// which flags an unexpected prompt in a test.
#[derive(Debug, Default)]
pub struct ScriptedInteraction {
    pub confirm: RefCell<VecDeque<Option<bool>>>,
    pub sources: RefCell<VecDeque<Option<VersionSource>>>,
    pub inputs: RefCell<VecDeque<Option<String>>>,
    pub rejected_inputs: RefCell<Vec<String>>,
    pub reported: RefCell<Vec<Status>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm(self, answer: Option<bool>) -> Self {
        self.confirm.borrow_mut().push_back(answer);
        self
    }

    pub fn source(self, answer: Option<VersionSource>) -> Self {
        self.sources.borrow_mut().push_back(answer);
        self
    }

    pub fn input(self, answer: Option<&str>) -> Self {
        self.inputs.borrow_mut().push_back(answer.map(str::to_string));
        self
    }

    pub fn reported(&self) -> Vec<Status> {
        self.reported.borrow().clone()
    }

    pub fn rejected_inputs(&self) -> Vec<String> {
        self.rejected_inputs.borrow().clone()
    }
}

impl Interaction for ScriptedInteraction {
    fn confirm_plugin_root(&self) -> Result<Option<bool>, AppError> {
        Ok(self.confirm.borrow_mut().pop_front().expect("unexpected confirmation prompt"))
    }

    fn choose_source(&self) -> Result<Option<VersionSource>, AppError> {
        Ok(self.sources.borrow_mut().pop_front().expect("unexpected source prompt"))
    }

    fn input_version(
        &self,
        _initial: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<Option<String>, AppError> {
        // Mirrors the terminal: keep asking until the validator accepts.
        loop {
            let answer = self.inputs.borrow_mut().pop_front().expect("unexpected version prompt");
            match answer {
                None => return Ok(None),
                Some(value) => match validate(&value) {
                    Ok(()) => return Ok(Some(value)),
                    Err(_) => self.rejected_inputs.borrow_mut().push(value),
                },
            }
        }
    }

    fn report(&self, status: &Status) {
        self.reported.borrow_mut().push(status.clone());
    }
}
