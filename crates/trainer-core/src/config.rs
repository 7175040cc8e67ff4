// crates/trainer-core/src/config.rs - Configuration System
//
// This module provides the configuration schema and loading mechanism for
// trainergen. Every field has a default, so a missing or partial config file
// is never an error.
//
// CONFIGURATION HIERARCHY (highest to lowest priority):
// 1. Command-line arguments (--load, --pokedex, etc.)
// 2. Environment variables (TRAINERGEN_EXPORT_PATH, TRAINERGEN_POKEDEX_URL, etc.)
// 3. Config file given with --config
// 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::pokemon::{MAX_MOVES, assert_valid_level};

/// Errors that can occur during configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid TOML syntax in {file}: {error}")]
    ParseError { file: String, error: String },

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("I/O error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete configuration schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Settings for the trainer created at startup
    #[serde(default)]
    pub trainer: TrainerConfig,

    /// Import/export file settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Where species data comes from
    #[serde(default)]
    pub pokedex: PokedexConfig,

    /// How new pokemon are filled in
    #[serde(default)]
    pub factory: FactoryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Name given to the fresh trainer
    #[serde(default = "default_trainer_name")]
    pub default_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path offered by the Export and Import prompts
    ///
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_storage_path")]
    pub default_path: String,
}

/// Species data source
///
/// When `offline_file` is set, lookups are served from that JSON file and the
/// HTTP settings are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokedexConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub offline_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Level given to newly added pokemon
    #[serde(default = "default_level")]
    pub default_level: u32,

    /// Size of randomized movesets
    #[serde(default = "default_max_moves")]
    pub max_moves: usize,
}

/// Configuration loading and management
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from an optional file plus environment overrides
    ///
    /// LOADING STRATEGY:
    /// 1. Start with built-in defaults
    /// 2. Replace with the config file (if given)
    /// 3. Apply environment variable overrides
    /// 4. Validate the result
    pub fn load_config(config_path: Option<&Path>) -> ConfigResult<GeneratorConfig> {
        let mut config = match config_path {
            Some(path) => Self::load_file(path)?,
            None => GeneratorConfig::default(),
        };

        Self::apply_env_overrides(&mut config);
        Self::validate_config(&config)?;

        Ok(config)
    }

    /// Parse a config file
    ///
    /// An explicitly requested file that does not exist is an error.
    pub fn load_file(path: &Path) -> ConfigResult<GeneratorConfig> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, file: &str) -> ConfigResult<GeneratorConfig> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            file: file.to_string(),
            error: e.to_string(),
        })
    }

    /// Commented config file matching the built-in defaults
    pub fn generate_default_config() -> String {
        r#"# trainergen configuration
#
# Every setting is optional; the values below are the defaults.

[trainer]
# Name of the trainer created at startup
default_name = "trainer"

[storage]
# Path offered by the Export and Import prompts
default_path = "trainer.json"

[pokedex]
# Species data API
base_url = "https://pokeapi.co/api/v2"
timeout_secs = 30
user_agent = "trainergen/0.1"

# Serve lookups from a local JSON file instead of the API
# offline_file = "pokedex.json"

[factory]
# Level given to newly added pokemon (1-100)
default_level = 50

# Number of moves drawn for random movesets (1-4)
max_moves = 4
"#
        .to_string()
    }

    /// Apply environment variable overrides
    ///
    /// - TRAINERGEN_TRAINER_NAME -> trainer.default_name
    /// - TRAINERGEN_EXPORT_PATH -> storage.default_path
    /// - TRAINERGEN_POKEDEX_URL -> pokedex.base_url
    /// - TRAINERGEN_POKEDEX_FILE -> pokedex.offline_file
    fn apply_env_overrides(config: &mut GeneratorConfig) {
        use std::env;

        if let Ok(name) = env::var("TRAINERGEN_TRAINER_NAME") {
            config.trainer.default_name = name;
        }

        if let Ok(path) = env::var("TRAINERGEN_EXPORT_PATH") {
            config.storage.default_path = path;
        }

        if let Ok(url) = env::var("TRAINERGEN_POKEDEX_URL") {
            config.pokedex.base_url = url;
        }

        if let Ok(file) = env::var("TRAINERGEN_POKEDEX_FILE") {
            config.pokedex.offline_file = Some(file);
        }
    }

    /// Reject values that would fail later at runtime
    pub fn validate_config(config: &GeneratorConfig) -> ConfigResult<()> {
        if config.trainer.default_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "trainer.default_name cannot be empty".to_string(),
            ));
        }

        if config.storage.default_path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.default_path cannot be empty".to_string(),
            ));
        }

        if config.pokedex.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "pokedex.base_url cannot be empty".to_string(),
            ));
        }

        if config.pokedex.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "pokedex.timeout_secs must be greater than 0".to_string(),
            ));
        }

        assert_valid_level(i64::from(config.factory.default_level)).map_err(|_| {
            ConfigError::ValidationError(format!(
                "Invalid factory.default_level {}. Must be between 1 and 100",
                config.factory.default_level
            ))
        })?;

        if !(1..=MAX_MOVES).contains(&config.factory.max_moves) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid factory.max_moves {}. Must be between 1 and {}",
                config.factory.max_moves, MAX_MOVES
            )));
        }

        Ok(())
    }
}

fn default_trainer_name() -> String {
    "trainer".to_string()
}
fn default_storage_path() -> String {
    "trainer.json".to_string()
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    "trainergen/0.1".to_string()
}

fn default_level() -> u32 {
    crate::factory::DEFAULT_LEVEL
}
fn default_max_moves() -> usize {
    MAX_MOVES
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            default_name: default_trainer_name(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_path: default_storage_path(),
        }
    }
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            offline_file: None,
        }
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            max_moves: default_max_moves(),
        }
    }
}
