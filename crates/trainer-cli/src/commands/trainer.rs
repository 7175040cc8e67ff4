// crates/trainer-cli/src/commands/trainer.rs - Trainer editor

use anyhow::Result;
use tracing::debug;
use trainer_core::Trainer;

use super::root::render_trainer;
use crate::context::Context;
use crate::menu::{Flow, Menu, MenuCommand};

pub struct TrainerMenu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerCommand {
    Return,
    Print,
    Name,
}

impl Menu for TrainerMenu {
    type Command = TrainerCommand;

    fn message(&self) -> &str {
        "Select action"
    }

    fn options(&self, _trainer: &Trainer) -> Vec<(String, TrainerCommand)> {
        vec![
            ("Return".to_string(), TrainerCommand::Return),
            ("Print".to_string(), TrainerCommand::Print),
            ("Name".to_string(), TrainerCommand::Name),
        ]
    }
}

impl MenuCommand for TrainerCommand {
    fn execute(&self, ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow> {
        match self {
            TrainerCommand::Return => Ok(Flow::Close),
            TrainerCommand::Print => {
                println!("{}", render_trainer(trainer)?);
                Ok(Flow::Continue)
            }
            TrainerCommand::Name => {
                let answer = ctx.prompt.input("Trainer Name", Some(trainer.name.as_str()))?;
                let name = answer.trim();

                // Blank keeps the current name
                if !name.is_empty() {
                    debug!(from = %trainer.name, to = name, "renamed trainer");
                    trainer.name = name.to_string();
                }

                Ok(Flow::Continue)
            }
        }
    }
}
