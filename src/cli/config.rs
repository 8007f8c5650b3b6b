//! TOML configuration file support.
//!
//! ```toml
//! # spimdata.toml
//! [document]
//! unknown_attributes = "skip"   # or "abort" (default)
//! indent = 2
//!
//! [import]
//! base_path = "/data/datasets"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use spimdata::document::DocumentOptions;

/// Root configuration structure for spimdata.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Document reading and writing options.
    #[serde(default)]
    pub document: DocumentOptions,

    /// Settings for the import command.
    #[serde(default)]
    pub import: ImportConfig,
}

/// Configuration for the import command.
#[derive(Debug, Default, Deserialize)]
pub struct ImportConfig {
    /// Base path stored in imported datasets.
    pub base_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Configuration from `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
