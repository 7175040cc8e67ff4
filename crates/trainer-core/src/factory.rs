// crates/trainer-core/src/factory.rs - Building new team members
//
// The factory turns a typed name into a complete pokemon: it checks the name
// against the pokedex, then fills in the remaining fields. Level comes from
// configuration; ability, nature and moveset are drawn at random.

use rand::Rng;
use tracing::debug;

use crate::pokedex::{Pokedex, PokedexError};
use crate::pokemon::{
    MAX_MOVES, Pokemon, PokemonError, PokemonResult, assert_valid_level, select_random,
    select_random_moveset, select_random_nature,
};

/// Level assigned to new pokemon when nothing else is configured
pub const DEFAULT_LEVEL: u32 = 50;

/// Creates pokemon with randomized ability, nature and moveset
pub struct RandomizedPokemonFactory<'a> {
    pokedex: &'a dyn Pokedex,
    default_level: u32,
    max_moves: usize,
}

impl<'a> RandomizedPokemonFactory<'a> {
    pub fn new(pokedex: &'a dyn Pokedex) -> Self {
        Self {
            pokedex,
            default_level: DEFAULT_LEVEL,
            max_moves: MAX_MOVES,
        }
    }

    /// Override the starting level
    pub fn with_default_level(mut self, level: u32) -> Self {
        self.default_level = level;
        self
    }

    /// Override the moveset size (capped at `MAX_MOVES`)
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves.min(MAX_MOVES);
        self
    }

    /// Build a pokemon for `name`
    ///
    /// Fails with `CreationFailed` for an empty name, a name the pokedex does
    /// not know, a failed lookup, or a species without abilities.
    pub fn create<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> PokemonResult<Pokemon> {
        if name.trim().is_empty() {
            return Err(PokemonError::CreationFailed(
                "Empty string is given for Pokemon name".to_string(),
            ));
        }

        assert_valid_level(i64::from(self.default_level))?;

        let name = self.pokedex.resolve_name(name).map_err(creation_failed)?;
        let abilities = self.pokedex.get_abilities(&name).map_err(creation_failed)?;
        let moves = self.pokedex.get_moves(&name).map_err(creation_failed)?;

        let ability = select_random(&abilities, rng).ok_or_else(|| {
            PokemonError::CreationFailed(format!("No abilities known for {}", name))
        })?;

        let pokemon = Pokemon {
            level: self.default_level,
            ability,
            nature: select_random_nature(rng),
            moveset: select_random_moveset(&moves, self.max_moves, rng),
            name,
        };

        debug!(name = %pokemon.name, ability = %pokemon.ability, "created pokemon");
        Ok(pokemon)
    }
}

fn creation_failed(err: PokedexError) -> PokemonError {
    PokemonError::CreationFailed(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::{PokedexEntry, StaticPokedex};
    use crate::pokemon::NATURES;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pokedex() -> StaticPokedex {
        StaticPokedex::new()
            .with_entry(
                "charmander",
                PokedexEntry {
                    abilities: vec!["blaze".to_string(), "solar-power".to_string()],
                    moves: ["scratch", "ember", "growl", "smokescreen", "slash", "flamethrower"]
                        .iter()
                        .map(|m| m.to_string())
                        .collect(),
                },
            )
            .with_entry("ditto", PokedexEntry::default())
    }

    #[test]
    fn test_create() {
        let pokedex = pokedex();
        let factory = RandomizedPokemonFactory::new(&pokedex);
        let mut rng = StdRng::seed_from_u64(42);

        let pokemon = factory.create("Charmander", &mut rng).unwrap();
        assert_eq!(pokemon.name, "charmander");
        assert_eq!(pokemon.level, DEFAULT_LEVEL);
        assert!(["blaze", "solar-power"].contains(&pokemon.ability.as_str()));
        assert!(NATURES.contains(&pokemon.nature.as_str()));
        assert_eq!(pokemon.moveset.len(), MAX_MOVES);
    }

    #[test]
    fn test_create_with_overrides() {
        let pokedex = pokedex();
        let factory = RandomizedPokemonFactory::new(&pokedex)
            .with_default_level(5)
            .with_max_moves(2);
        let mut rng = StdRng::seed_from_u64(1);

        let pokemon = factory.create("charmander", &mut rng).unwrap();
        assert_eq!(pokemon.level, 5);
        assert_eq!(pokemon.moveset.len(), 2);
    }

    #[test]
    fn test_empty_name_fails() {
        let pokedex = pokedex();
        let factory = RandomizedPokemonFactory::new(&pokedex);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            factory.create("", &mut rng),
            Err(PokemonError::CreationFailed(
                "Empty string is given for Pokemon name".to_string()
            ))
        );
        assert!(factory.create("   ", &mut rng).is_err());
    }

    #[test]
    fn test_unknown_name_fails() {
        let pokedex = pokedex();
        let factory = RandomizedPokemonFactory::new(&pokedex);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            factory.create("agumon", &mut rng),
            Err(PokemonError::CreationFailed(_))
        ));
    }

    #[test]
    fn test_species_without_abilities_fails() {
        let pokedex = pokedex();
        let factory = RandomizedPokemonFactory::new(&pokedex);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            factory.create("ditto", &mut rng),
            Err(PokemonError::CreationFailed(_))
        ));
    }

    #[test]
    fn test_invalid_default_level_fails() {
        let pokedex = pokedex();
        let factory = RandomizedPokemonFactory::new(&pokedex).with_default_level(0);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            factory.create("charmander", &mut rng),
            Err(PokemonError::LevelInvalid(_))
        ));
    }
}
