//! Mock implementations for testing
//!
//! Scripted answers for the interactive session, so prompt flows can be
//! driven without a terminal.

use crate::error::{Result, ValidatorError};
use crate::prompt::Prompter;
use std::collections::VecDeque;

/// Answers text prompts and Y/N questions from fixed scripts, in order.
///
/// Running out of answers is reported as an unexpected end of input rather
/// than a panic, and every prompt shown is recorded.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    confirmations: VecDeque<bool>,
    asked: Vec<String>,
    questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answers<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
        self
    }

    pub fn with_confirmations(mut self, confirmations: &[bool]) -> Self {
        self.confirmations.extend(confirmations.iter().copied());
        self
    }

    /// Text prompts shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Y/N questions shown so far.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty() && self.confirmations.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| ValidatorError::unexpected_end_of_input(prompt))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.questions.push(prompt.to_string());
        self.confirmations
            .pop_front()
            .ok_or_else(|| ValidatorError::unexpected_end_of_input(prompt))
    }
}
