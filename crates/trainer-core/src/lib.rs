// crates/trainer-core/src/lib.rs - Core library for trainer records
//
// Everything here is free of terminal and network concerns: the CLI crate
// supplies prompts, HTTP lookups and file storage, and calls into this crate
// for the records themselves and the rules that govern them.

pub mod config; // Configuration schema, loading and validation
pub mod factory; // Randomized creation of new team members
pub mod pokedex; // Species data lookup trait and in-memory implementation
pub mod pokemon; // Team member record, level rules, random draws
pub mod trainer; // Trainer record and slot-based team operations

pub use config::{ConfigError, ConfigManager, ConfigResult, GeneratorConfig};
pub use factory::RandomizedPokemonFactory;
pub use pokedex::{Pokedex, PokedexEntry, PokedexError, PokedexResult, StaticPokedex};
pub use pokemon::{Pokemon, PokemonError, PokemonResult};
pub use trainer::{TEAM_SLOTS, Trainer, TrainerError, TrainerResult};
