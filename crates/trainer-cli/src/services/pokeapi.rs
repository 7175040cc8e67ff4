// crates/trainer-cli/src/services/pokeapi.rs - HTTP pokedex client
//
// Species data comes from a PokeAPI-compatible endpoint. One request per
// species (`GET {base_url}/pokemon/{name}`) answers every question the editor
// asks, so responses are cached for the rest of the session.

use anyhow::{Context as AnyhowContext, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace};
use trainer_core::config::PokedexConfig;
use trainer_core::pokedex::{Pokedex, PokedexError, PokedexResult, normalize_name};

/// Subset of the `/pokemon/{name}` response the editor uses
#[derive(Debug, Clone, Deserialize)]
struct ApiPokemon {
    name: String,
    #[serde(default)]
    abilities: Vec<ApiAbilitySlot>,
    #[serde(default)]
    moves: Vec<ApiMoveSlot>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiAbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiMoveSlot {
    #[serde(rename = "move")]
    move_: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct NamedResource {
    name: String,
}

/// Blocking client for the species API
pub struct PokeApi {
    client: Client,
    base_url: String,
    cache: RefCell<HashMap<String, ApiPokemon>>,
}

impl PokeApi {
    pub fn new(config: &PokedexConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client for the pokedex")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache: RefCell::new(HashMap::new()),
        })
    }

    fn species_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    fn fetch(&self, name: &str) -> PokedexResult<ApiPokemon> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(PokedexError::NotFound(key));
        }

        if let Some(cached) = self.cache.borrow().get(&key) {
            trace!(name = %key, "pokedex cache hit");
            return Ok(cached.clone());
        }

        let url = self.species_url(&key);
        debug!(%url, "fetching species data");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PokedexError::Request(format!("request to {} failed: {}", url, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(key));
        }

        if !response.status().is_success() {
            return Err(PokedexError::Request(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let species: ApiPokemon = response
            .json()
            .map_err(|e| PokedexError::Malformed(format!("{}: {}", url, e)))?;

        self.cache.borrow_mut().insert(key, species.clone());
        Ok(species)
    }
}

impl Pokedex for PokeApi {
    fn resolve_name(&self, name: &str) -> PokedexResult<String> {
        Ok(self.fetch(name)?.name)
    }

    fn get_abilities(&self, name: &str) -> PokedexResult<Vec<String>> {
        Ok(self
            .fetch(name)?
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect())
    }

    fn get_moves(&self, name: &str) -> PokedexResult<Vec<String>> {
        Ok(self
            .fetch(name)?
            .moves
            .into_iter()
            .map(|slot| slot.move_.name)
            .collect())
    }
}
