// crates/trainer-cli/src/services/mod.rs - Service layer modules
pub mod pokeapi;
pub mod prompt;
pub mod storage;

pub use pokeapi::PokeApi;
pub use prompt::{DialoguerPrompt, Prompt};
pub use storage::TrainerStorage;
