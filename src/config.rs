//! Configuration for nvkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{NvError, Result};
use crate::storage::MIN_RECORD_LEN;

/// Main configuration for an nvkv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file for the byte store
    pub store_path: PathBuf,

    /// Store capacity in bytes
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Session Configuration
    // -------------------------------------------------------------------------
    /// Line editor buffer capacity in bytes; input beyond it is dropped
    pub line_capacity: usize,

    /// Prompt re-displayed after every line
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("./nvkv.img"),
            capacity: 1024,
            line_capacity: 100,
            prompt: "nvkv> ".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject configurations the store cannot operate under
    pub fn validate(&self) -> Result<()> {
        if self.capacity < MIN_RECORD_LEN {
            return Err(NvError::Config(format!(
                "capacity {} cannot hold a single record (minimum {})",
                self.capacity, MIN_RECORD_LEN
            )));
        }
        if self.line_capacity == 0 {
            return Err(NvError::Config(
                "line buffer capacity must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing store path
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    /// Set the store capacity (in bytes)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the line editor buffer capacity (in bytes)
    pub fn line_capacity(mut self, capacity: usize) -> Self {
        self.config.line_capacity = capacity;
        self
    }

    /// Set the session prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
