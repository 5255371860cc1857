//! Configuration loading.
//!
//! All engine settings can be read from a single TOML file; every section
//! is optional and falls back to its defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::narrator::NarratorConfig;
use crate::reference_store::{EmbeddedSource, JsonFileSource, RecordSource};
use crate::scorer::ScoreWeights;
use crate::selector::StrategyKind;

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerraConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub narrator: NarratorConfig,
}

impl TerraConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.weights.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Where the reference dataset is read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// JSON file with the 64 records. Absent means the embedded dataset.
    pub path: Option<PathBuf>,
}

impl DatasetConfig {
    pub fn source(&self) -> Arc<dyn RecordSource> {
        match &self.path {
            Some(path) => Arc::new(JsonFileSource::new(path.clone())),
            None => Arc::new(EmbeddedSource),
        }
    }
}

/// Which strategy each reading mode uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub basic: StrategyKind,
    pub full: StrategyKind,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            basic: StrategyKind::PoolIndexed,
            full: StrategyKind::Matrix,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}
