// crates/trainer-cli/src/commands/team.rs - Team editor
//
// Shows all six team slots. A filled slot opens the slot editor; an empty slot
// offers to add a pokemon instead. Slot labels and commands are rebuilt on
// every render, so adding or removing a pokemon is reflected immediately.

use anyhow::Result;
use tracing::debug;
use trainer_core::pokemon::parse_level;
use trainer_core::{TEAM_SLOTS, Trainer};

use super::slot::SlotMenu;
use crate::context::Context;
use crate::menu::{Flow, Menu, MenuCommand, run_menu};

pub struct TeamMenu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamCommand {
    Return,
    EditSlot(usize),
    AddPokemon,
    TeamLevel,
}

impl Menu for TeamMenu {
    type Command = TeamCommand;

    fn message(&self) -> &str {
        "Select Pokemon"
    }

    fn options(&self, trainer: &Trainer) -> Vec<(String, TeamCommand)> {
        let mut options = vec![("Return".to_string(), TeamCommand::Return)];

        for slot in 0..TEAM_SLOTS {
            options.push((slot_label(trainer, slot), slot_command(trainer, slot)));
        }

        options.push(("Team Level".to_string(), TeamCommand::TeamLevel));
        options
    }
}

impl MenuCommand for TeamCommand {
    fn execute(&self, ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow> {
        match *self {
            TeamCommand::Return => Ok(Flow::Close),
            TeamCommand::EditSlot(slot) => {
                run_menu(&SlotMenu::new(slot), ctx, trainer)?;
                Ok(Flow::Continue)
            }
            TeamCommand::AddPokemon => add_pokemon(ctx, trainer),
            TeamCommand::TeamLevel => edit_team_level(ctx, trainer),
        }
    }
}

/// "[n] Name" for a filled slot, "[n] Empty" otherwise (n is one-based)
pub fn slot_label(trainer: &Trainer, slot: usize) -> String {
    let name = match trainer.pokemon(slot) {
        Ok(pokemon) => pokemon.display_name(),
        // SlotNotExist
        Err(_) => "Empty".to_string(),
    };

    format!("[{}] {}", slot + 1, name)
}

/// Edit an existing slot, or add a pokemon when the slot is empty
pub fn slot_command(trainer: &Trainer, slot: usize) -> TeamCommand {
    match trainer.pokemon(slot) {
        Ok(_) => TeamCommand::EditSlot(slot),
        Err(_) => TeamCommand::AddPokemon,
    }
}

fn add_pokemon(ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow> {
    let name = ctx.prompt.input("Pokemon Name", None)?.trim().to_lowercase();

    match ctx.create_pokemon(&name) {
        Ok(pokemon) => match trainer.add_pokemon(pokemon) {
            Ok(slot) => debug!(slot, %name, "added pokemon"),
            Err(e) => debug!(error = %e, "pokemon not added"),
        },
        Err(e) => debug!(error = %e, "pokemon not added"),
    }

    Ok(Flow::Continue)
}

fn edit_team_level(ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow> {
    let answer = ctx.prompt.input("Team Level", None)?;

    let result = parse_level(&answer).and_then(|l| trainer.set_team_level(l));
    if let Err(e) = result {
        debug!(error = %e, "team level unchanged");
    }

    Ok(Flow::Continue)
}
