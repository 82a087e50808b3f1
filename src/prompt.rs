use anyhow::Result;
use dialoguer::{Confirm, Input};

/// Source of operator answers.
pub trait Prompter {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool>;
    fn ask_line(&mut self, prompt: &str) -> Result<String>;
}

/// Asks on the terminal.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).interact()?)
    }

    fn ask_line(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
