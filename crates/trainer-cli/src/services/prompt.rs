// crates/trainer-cli/src/services/prompt.rs - Interactive prompt surface
//
// Commands only ever need three kinds of question: pick one entry from a list,
// type a line of text, or answer yes/no. The `Prompt` trait captures exactly
// that, so the menu tree never depends on how questions are rendered.

use anyhow::{Context as AnyhowContext, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// The three questions a command can ask
pub trait Prompt {
    /// Pick one label; returns its index
    fn select(&mut self, message: &str, labels: &[String], default: usize) -> Result<usize>;

    /// Read a line of text; an empty answer yields `default` when one is given
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts rendered with dialoguer
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for DialoguerPrompt {
    fn select(&mut self, message: &str, labels: &[String], default: usize) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(labels)
            .default(default.min(labels.len().saturating_sub(1)))
            .interact()
            .with_context(|| format!("Failed to read selection for '{}'", message))
    }

    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true);

        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        input
            .interact_text()
            .with_context(|| format!("Failed to read input for '{}'", message))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .with_context(|| format!("Failed to read confirmation for '{}'", message))
    }
}
