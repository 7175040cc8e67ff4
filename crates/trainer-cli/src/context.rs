use anyhow::{Context as AnyhowContext, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;
use trainer_core::{
    GeneratorConfig, Pokedex, Pokemon, PokemonResult, RandomizedPokemonFactory, StaticPokedex,
};

use crate::services::{DialoguerPrompt, PokeApi, Prompt, TrainerStorage};

/// Application context that gets passed to every command
///
/// This is the "dependency injection container" for the menu tree: it owns
/// the services commands talk to, but not the trainer itself. The trainer is
/// passed alongside as `&mut Trainer` so ownership of the edited state stays
/// explicit.
pub struct Context {
    pub prompt: Box<dyn Prompt>,
    pub pokedex: Box<dyn Pokedex>,
    pub storage: TrainerStorage,
    pub rng: StdRng,
    config: GeneratorConfig,
}

impl Context {
    /// Build the production context
    ///
    /// Pokedex source precedence: `--pokedex` file > `pokedex.offline_file` > HTTP API.
    pub fn new(config: GeneratorConfig, pokedex_file: Option<PathBuf>) -> Result<Self> {
        let pokedex_file =
            pokedex_file.or_else(|| config.pokedex.offline_file.as_ref().map(PathBuf::from));

        let pokedex: Box<dyn Pokedex> = match pokedex_file {
            Some(path) => Box::new(load_offline_pokedex(&path)?),
            None => Box::new(PokeApi::new(&config.pokedex)?),
        };

        let base_dir = env::current_dir().context("Failed to determine working directory")?;

        Ok(Self::with_services(
            config,
            Box::new(DialoguerPrompt::new()),
            pokedex,
            TrainerStorage::new(base_dir),
            StdRng::from_os_rng(),
        ))
    }

    /// Build a context from explicit services
    pub fn with_services(
        config: GeneratorConfig,
        prompt: Box<dyn Prompt>,
        pokedex: Box<dyn Pokedex>,
        storage: TrainerStorage,
        rng: StdRng,
    ) -> Self {
        Self {
            prompt,
            pokedex,
            storage,
            rng,
            config,
        }
    }

    /// Create a new pokemon through the randomized factory
    pub fn create_pokemon(&mut self, name: &str) -> PokemonResult<Pokemon> {
        let factory = RandomizedPokemonFactory::new(self.pokedex.as_ref())
            .with_default_level(self.config.factory.default_level)
            .with_max_moves(self.config.factory.max_moves);

        factory.create(name, &mut self.rng)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

fn load_offline_pokedex(path: &Path) -> Result<StaticPokedex> {
    let pokedex = StaticPokedex::from_json_file(path)
        .with_context(|| format!("Failed to load pokedex file: {}", path.display()))?;

    info!(path = %path.display(), species = pokedex.len(), "using offline pokedex");
    Ok(pokedex)
}
