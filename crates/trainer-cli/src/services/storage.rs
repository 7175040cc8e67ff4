// crates/trainer-cli/src/services/storage.rs - Trainer file storage
//
// This service handles reading and writing trainer records as JSON files.
// It knows HOW to move a trainer to and from disk; the Export and Import
// commands decide WHEN and WHERE.
//
// FILE FORMAT:
// Pretty-printed JSON with two-space indentation:
// {"name": "...", "properties": {"team": [{"name", "level", "ability", "nature", "moveset"}]}}

use anyhow::{Context as AnyhowContext, Result};
use std::fs;
use std::path::{Path, PathBuf};
use trainer_core::Trainer;

/// Reads and writes trainer files relative to a base directory
pub struct TrainerStorage {
    /// Relative paths resolve against this directory
    base_dir: PathBuf,
}

impl TrainerStorage {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve a user-supplied path against the base directory
    ///
    /// Absolute paths are used as-is.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path.trim())
    }

    /// Write `trainer` to `path`, creating parent directories as needed
    ///
    /// Returns the full path written.
    pub fn save(&self, trainer: &Trainer, path: &str) -> Result<PathBuf> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = trainer
            .to_pretty_json()
            .context("Failed to serialize trainer")?;

        fs::write(&full_path, json)
            .with_context(|| format!("Failed to write trainer file: {}", full_path.display()))?;

        Ok(full_path)
    }

    /// Read a trainer from `path`
    pub fn load(&self, path: &str) -> Result<Trainer> {
        self.load_path(&self.resolve(path))
    }

    /// Read a trainer from an already resolved path
    pub fn load_path(&self, path: &Path) -> Result<Trainer> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read trainer file: {}", path.display()))?;

        let trainer: Trainer = serde_json::from_str(&content)
            .with_context(|| format!("Malformed trainer file: {}", path.display()))?;

        trainer
            .validate()
            .with_context(|| format!("Malformed trainer file: {}", path.display()))?;

        Ok(trainer)
    }
}
