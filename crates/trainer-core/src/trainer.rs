// crates/trainer-core/src/trainer.rs - The trainer record edited by the CLI
//
// The trainer is the only mutable state in a session. It is created once at
// startup, handed to every command as `&mut Trainer`, and replaced wholesale
// when a file is imported.
//
// SLOT MODEL:
// A slot is a zero-based position in the team. Slot `n` exists only while
// `n < team.len()`; asking for a missing slot is an error the caller decides
// how to present (the team editor turns it into an "Empty" placeholder).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pokemon::{Pokemon, PokemonResult, assert_valid_level};

/// Number of slots shown by the team editor
pub const TEAM_SLOTS: usize = 6;

/// Errors raised by team operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainerError {
    #[error("Pokemon slot {0} does not exist")]
    SlotNotExist(usize),

    #[error("Team is full ({0} pokemon)")]
    TeamFull(usize),

    #[error("Team has {0} pokemon, at most {} allowed", TEAM_SLOTS)]
    TeamTooLarge(usize),
}

/// Result type for trainer operations
pub type TrainerResult<T> = Result<T, TrainerError>;

/// Trainer record: `{"name": ..., "properties": {"team": [...]}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
    #[serde(default)]
    pub properties: TrainerProperties,
}

/// Everything besides the name lives under `properties`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerProperties {
    #[serde(default)]
    pub team: Vec<Pokemon>,
}

impl Trainer {
    /// Create a trainer with an empty team
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            properties: TrainerProperties::default(),
        }
    }

    pub fn team(&self) -> &[Pokemon] {
        &self.properties.team
    }

    pub fn team_len(&self) -> usize {
        self.properties.team.len()
    }

    /// Pokemon at `slot`, or `SlotNotExist`
    pub fn pokemon(&self, slot: usize) -> TrainerResult<&Pokemon> {
        self.properties
            .team
            .get(slot)
            .ok_or(TrainerError::SlotNotExist(slot))
    }

    /// Mutable pokemon at `slot`, or `SlotNotExist`
    pub fn pokemon_mut(&mut self, slot: usize) -> TrainerResult<&mut Pokemon> {
        self.properties
            .team
            .get_mut(slot)
            .ok_or(TrainerError::SlotNotExist(slot))
    }

    /// Check a trainer built outside `add_pokemon` (e.g. deserialized)
    pub fn validate(&self) -> TrainerResult<()> {
        if self.team_len() > TEAM_SLOTS {
            return Err(TrainerError::TeamTooLarge(self.team_len()));
        }
        Ok(())
    }

    /// Append a pokemon to the end of the team
    pub fn add_pokemon(&mut self, pokemon: Pokemon) -> TrainerResult<usize> {
        if self.team_len() >= TEAM_SLOTS {
            return Err(TrainerError::TeamFull(self.team_len()));
        }

        self.properties.team.push(pokemon);
        Ok(self.team_len() - 1)
    }

    /// Remove the pokemon at `slot`; later pokemon shift down by one
    pub fn remove_pokemon(&mut self, slot: usize) -> TrainerResult<Pokemon> {
        if slot >= self.team_len() {
            return Err(TrainerError::SlotNotExist(slot));
        }

        Ok(self.properties.team.remove(slot))
    }

    /// Set every team member to `level`
    ///
    /// The level is checked once up front, so an invalid value leaves the
    /// whole team untouched.
    pub fn set_team_level(&mut self, level: i64) -> PokemonResult<()> {
        assert_valid_level(level)?;

        for pokemon in &mut self.properties.team {
            pokemon.level = level as u32;
        }

        Ok(())
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
