// crates/trainer-core/src/pokemon.rs - Team member record and its value rules
//
// A pokemon on a trainer's team is a plain record: everything the editor can
// change lives here as owned data so the whole team serializes to JSON as-is.
// The helpers below own the small set of value rules the editor enforces:
// the level range, the nature table and how random movesets are drawn.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest level a pokemon may have
pub const MIN_LEVEL: i64 = 1;

/// Highest level a pokemon may have
pub const MAX_LEVEL: i64 = 100;

/// A moveset never holds more than this many moves
pub const MAX_MOVES: usize = 4;

/// The 25 natures a pokemon can be assigned
pub const NATURES: [&str; 25] = [
    "hardy", "lonely", "brave", "adamant", "naughty", "bold", "docile", "relaxed", "impish",
    "lax", "timid", "hasty", "serious", "jolly", "naive", "modest", "mild", "quiet", "bashful",
    "rash", "calm", "gentle", "sassy", "careful", "quirky",
];

/// Errors raised while creating or editing a single pokemon
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PokemonError {
    #[error("Level invalid: {0}")]
    LevelInvalid(String),

    #[error("Pokemon creation failed: {0}")]
    CreationFailed(String),
}

/// Result type for pokemon operations
pub type PokemonResult<T> = Result<T, PokemonError>;

/// A single team member
///
/// Field order matches the export format, so `serde_json::to_string_pretty`
/// prints `name, level, ability, nature, moveset` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub level: u32,
    pub ability: String,
    pub nature: String,
    #[serde(default)]
    pub moveset: Vec<String>,
}

impl Pokemon {
    /// Lookup name of this pokemon (as stored, lowercase)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with the first letter upper-cased and the rest lower-cased
    ///
    /// Used for menu labels: "pikachu" and "PIKACHU" both render as "Pikachu".
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Validate and apply a new level
    pub fn set_level(&mut self, level: i64) -> PokemonResult<()> {
        assert_valid_level(level)?;
        self.level = level as u32;
        Ok(())
    }

    /// Pretty JSON form used by the print commands
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Check that a level is within `MIN_LEVEL..=MAX_LEVEL`
pub fn assert_valid_level(level: i64) -> PokemonResult<()> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(PokemonError::LevelInvalid(format!(
            "{} is outside {}..={}",
            level, MIN_LEVEL, MAX_LEVEL
        )))
    }
}

/// Parse a level typed by the user
///
/// Anything that is not an integer counts as an invalid level. The range is
/// checked by whoever applies the level (`Pokemon::set_level`,
/// `Trainer::set_team_level`).
pub fn parse_level(input: &str) -> PokemonResult<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| PokemonError::LevelInvalid(format!("'{}' is not a number", input.trim())))
}

/// Pick one of the 25 natures at random
pub fn select_random_nature<R: Rng + ?Sized>(rng: &mut R) -> String {
    NATURES
        .choose(rng)
        .map(|nature| nature.to_string())
        .unwrap_or_else(|| NATURES[0].to_string())
}

/// Draw up to `max_moves` distinct moves from the learnable set
///
/// When fewer moves are available than requested, all of them are returned
/// in random order.
pub fn select_random_moveset<R: Rng + ?Sized>(
    moves: &[String],
    max_moves: usize,
    rng: &mut R,
) -> Vec<String> {
    let count = max_moves.min(MAX_MOVES).min(moves.len());
    moves.choose_multiple(rng, count).cloned().collect()
}

/// Pick a random entry from a candidate list (abilities, mostly)
pub fn select_random<R: Rng + ?Sized>(candidates: &[String], rng: &mut R) -> Option<String> {
    candidates.choose(rng).cloned()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
