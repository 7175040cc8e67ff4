// crates/trainer-core/src/pokedex.rs - Creature data lookup
//
// The editor never stores species data itself. Whenever it needs to know which
// abilities or moves a pokemon can have, it asks a `Pokedex`. The CLI plugs in
// an HTTP client for the public API; this module ships an in-memory version
// that can also be loaded from a JSON file for offline use.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors returned by lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PokedexError {
    #[error("Unknown pokemon: {0}")]
    NotFound(String),

    #[error("Pokedex request failed: {0}")]
    Request(String),

    #[error("Malformed pokedex data: {0}")]
    Malformed(String),
}

/// Result type for lookups
pub type PokedexResult<T> = Result<T, PokedexError>;

/// Source of species data
///
/// All names are lookup names (lowercase, hyphenated), e.g. `"mr-mime"`.
pub trait Pokedex {
    /// Resolve a user-typed name to the canonical lookup name
    fn resolve_name(&self, name: &str) -> PokedexResult<String>;

    /// Abilities the species can have
    fn get_abilities(&self, name: &str) -> PokedexResult<Vec<String>>;

    /// Moves the species can learn
    fn get_moves(&self, name: &str) -> PokedexResult<Vec<String>>;
}

/// Normalize a user-typed name to lookup form
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Species data held by `StaticPokedex`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PokedexEntry {
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub moves: Vec<String>,
}

/// In-memory pokedex
///
/// File format:
/// ```json
/// { "pikachu": { "abilities": ["static"], "moves": ["thunderbolt"] } }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticPokedex {
    entries: HashMap<String, PokedexEntry>,
}

impl StaticPokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a species
    pub fn with_entry<S: AsRef<str>>(mut self, name: S, entry: PokedexEntry) -> Self {
        self.entries.insert(normalize_name(name.as_ref()), entry);
        self
    }

    /// Parse a pokedex from its JSON representation
    pub fn from_json(content: &str) -> PokedexResult<Self> {
        let raw: HashMap<String, PokedexEntry> =
            serde_json::from_str(content).map_err(|e| PokedexError::Malformed(e.to_string()))?;

        let entries = raw
            .into_iter()
            .map(|(name, entry)| (normalize_name(&name), entry))
            .collect();

        Ok(Self { entries })
    }

    /// Load a pokedex file from disk
    pub fn from_json_file(path: &Path) -> PokedexResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PokedexError::Request(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, name: &str) -> PokedexResult<&PokedexEntry> {
        let key = normalize_name(name);
        self.entries.get(&key).ok_or(PokedexError::NotFound(key))
    }
}

impl Pokedex for StaticPokedex {
    fn resolve_name(&self, name: &str) -> PokedexResult<String> {
        let key = normalize_name(name);
        if self.entries.contains_key(&key) {
            Ok(key)
        } else {
            Err(PokedexError::NotFound(key))
        }
    }

    fn get_abilities(&self, name: &str) -> PokedexResult<Vec<String>> {
        Ok(self.entry(name)?.abilities.clone())
    }

    fn get_moves(&self, name: &str) -> PokedexResult<Vec<String>> {
        Ok(self.entry(name)?.moves.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Pikachu "), "pikachu");
        assert_eq!(normalize_name("Mr Mime"), "mr-mime");
    }

    #[test]
    fn test_lookup() {
        let pokedex = StaticPokedex::new().with_entry(
            "Pikachu",
            PokedexEntry {
                abilities: vec!["static".to_string(), "lightning-rod".to_string()],
                moves: vec!["thunderbolt".to_string()],
            },
        );

        assert_eq!(pokedex.resolve_name("PIKACHU").unwrap(), "pikachu");
        assert_eq!(pokedex.get_abilities("pikachu").unwrap().len(), 2);
        assert_eq!(pokedex.get_moves("pikachu").unwrap(), vec!["thunderbolt"]);
        assert_eq!(
            pokedex.resolve_name("missingno"),
            Err(PokedexError::NotFound("missingno".to_string()))
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Eevee": {{"abilities": ["run-away"], "moves": ["tackle", "growl"]}}}}"#
        )
        .unwrap();

        let pokedex = StaticPokedex::from_json_file(file.path()).unwrap();
        assert_eq!(pokedex.len(), 1);
        assert_eq!(pokedex.get_moves("eevee").unwrap(), vec!["tackle", "growl"]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            StaticPokedex::from_json("[1, 2, 3]"),
            Err(PokedexError::Malformed(_))
        ));
    }

    #[test]
    fn test_unreadable_file_is_request_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = StaticPokedex::from_json_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(PokedexError::Request(_))));
    }
}
