// crates/trainer-cli/src/commands/slot.rs - Single pokemon editor
//
// Opened from the team editor for a filled slot. Every command is scoped to
// that slot. Invalid input (a bad level, a failed lookup) aborts only the one
// edit; the editor stays open. Remove always closes the editor, whether or
// not the removal was confirmed, because the slot it was opened for may no
// longer hold the same pokemon.

use anyhow::{Result, anyhow};
use tracing::{debug, warn};
use trainer_core::Trainer;
use trainer_core::pokemon::{parse_level, select_random_moveset, select_random_nature};

use crate::context::Context;
use crate::menu::{Flow, Menu, MenuCommand};

pub struct SlotMenu {
    slot: usize,
}

impl SlotMenu {
    pub fn new(slot: usize) -> Self {
        Self { slot }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCommand {
    Return,
    Print(usize),
    Level(usize),
    Ability(usize),
    Nature(usize),
    Moveset(usize),
    Remove(usize),
}

impl Menu for SlotMenu {
    type Command = SlotCommand;

    fn message(&self) -> &str {
        "Select action"
    }

    fn options(&self, _trainer: &Trainer) -> Vec<(String, SlotCommand)> {
        let slot = self.slot;
        vec![
            ("Return".to_string(), SlotCommand::Return),
            ("Print".to_string(), SlotCommand::Print(slot)),
            ("Level".to_string(), SlotCommand::Level(slot)),
            ("Ability".to_string(), SlotCommand::Ability(slot)),
            ("Nature".to_string(), SlotCommand::Nature(slot)),
            ("Moveset".to_string(), SlotCommand::Moveset(slot)),
            ("Remove".to_string(), SlotCommand::Remove(slot)),
        ]
    }
}

impl MenuCommand for SlotCommand {
    fn execute(&self, ctx: &mut Context, trainer: &mut Trainer) -> Result<Flow> {
        match *self {
            SlotCommand::Return => Ok(Flow::Close),
            SlotCommand::Print(slot) => {
                println!("{}", render_pokemon(trainer, slot)?);
                Ok(Flow::Continue)
            }
            SlotCommand::Level(slot) => edit_level(ctx, trainer, slot),
            SlotCommand::Ability(slot) => edit_ability(ctx, trainer, slot),
            SlotCommand::Nature(slot) => randomize_nature(ctx, trainer, slot),
            SlotCommand::Moveset(slot) => randomize_moveset(ctx, trainer, slot),
            SlotCommand::Remove(slot) => remove(ctx, trainer, slot),
        }
    }
}

/// Pretty JSON of the pokemon at `slot`
pub fn render_pokemon(trainer: &Trainer, slot: usize) -> Result<String> {
    Ok(trainer.pokemon(slot)?.to_pretty_json()?)
}

fn edit_level(ctx: &mut Context, trainer: &mut Trainer, slot: usize) -> Result<Flow> {
    let current = trainer.pokemon(slot)?.level.to_string();
    let answer = ctx.prompt.input("Pokemon Level", Some(current.as_str()))?;

    let pokemon = trainer.pokemon_mut(slot)?;
    if let Err(e) = parse_level(&answer).and_then(|l| pokemon.set_level(l)) {
        debug!(slot, error = %e, "level unchanged");
    }

    Ok(Flow::Continue)
}

fn edit_ability(ctx: &mut Context, trainer: &mut Trainer, slot: usize) -> Result<Flow> {
    let pokemon = trainer.pokemon(slot)?;

    let abilities = match ctx.pokedex.get_abilities(pokemon.name()) {
        Ok(abilities) if !abilities.is_empty() => abilities,
        Ok(_) => {
            warn!(name = pokemon.name(), "no abilities to choose from");
            return Ok(Flow::Continue);
        }
        Err(e) => {
            warn!(name = pokemon.name(), error = %e, "ability lookup failed");
            return Ok(Flow::Continue);
        }
    };

    let current = abilities
        .iter()
        .position(|ability| *ability == pokemon.ability)
        .unwrap_or(0);

    let choice = ctx.prompt.select("Pokemon Ability", &abilities, current)?;
    let ability = abilities
        .get(choice)
        .cloned()
        .ok_or_else(|| anyhow!("ability selection {} out of range", choice))?;

    trainer.pokemon_mut(slot)?.ability = ability;
    Ok(Flow::Continue)
}

fn randomize_nature(ctx: &mut Context, trainer: &mut Trainer, slot: usize) -> Result<Flow> {
    trainer.pokemon(slot)?;

    if ctx.prompt.confirm("Randomize nature?", false)? {
        trainer.pokemon_mut(slot)?.nature = select_random_nature(&mut ctx.rng);
    }

    Ok(Flow::Continue)
}

fn randomize_moveset(ctx: &mut Context, trainer: &mut Trainer, slot: usize) -> Result<Flow> {
    let name = trainer.pokemon(slot)?.name.clone();

    if !ctx.prompt.confirm("Randomize moveset?", false)? {
        return Ok(Flow::Continue);
    }

    let moves = match ctx.pokedex.get_moves(&name) {
        Ok(moves) => moves,
        Err(e) => {
            warn!(%name, error = %e, "move lookup failed");
            return Ok(Flow::Continue);
        }
    };

    let max_moves = ctx.config().factory.max_moves;
    trainer.pokemon_mut(slot)?.moveset = select_random_moveset(&moves, max_moves, &mut ctx.rng);
    Ok(Flow::Continue)
}

fn remove(ctx: &mut Context, trainer: &mut Trainer, slot: usize) -> Result<Flow> {
    if ctx.prompt.confirm("Remove this pokemon?", false)? {
        let removed = trainer.remove_pokemon(slot)?;
        debug!(slot, name = %removed.name, "removed pokemon");
    }

    Ok(Flow::Close)
}
