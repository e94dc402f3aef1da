//! Fretboard configuration
//!
//! Startup settings for the fretboard view: how many frets to show and the
//! initial selection. Loaded from YAML (files or strings) or from JSON handed
//! over by the host page. The tuning is fixed to standard and not configurable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::fretboard::DEFAULT_FRET_COUNT;
use crate::models::{ChordType, RootNote, ScaleType, Selection, Visibility};

pub const MIN_FRET_COUNT: u8 = 1;
pub const MAX_FRET_COUNT: u8 = 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fret count {0} out of range (must be 1-24)")]
    InvalidFretCount(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardConfig {
    pub fret_count: u8,
    pub default_root: Option<RootNote>,
    pub default_chord: Option<ChordType>,
    pub default_scale: Option<ScaleType>,
    pub visibility: Visibility,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        FretboardConfig {
            fret_count: DEFAULT_FRET_COUNT,
            default_root: Some(RootNote::A),
            default_chord: None,
            default_scale: None,
            visibility: Visibility::default(),
        }
    }
}

impl FretboardConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: FretboardConfig = serde_yaml::from_str(yaml)?;
        config.validate()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: FretboardConfig = serde_json::from_str(json)?;
        config.validate()
    }

    /// Load a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loading fretboard config from {}", path.display());
        Self::from_yaml_str(&content)
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(MIN_FRET_COUNT..=MAX_FRET_COUNT).contains(&self.fret_count) {
            return Err(ConfigError::InvalidFretCount(self.fret_count));
        }
        Ok(self)
    }

    /// Selection the session starts with
    pub fn initial_selection(&self) -> Selection {
        Selection::empty()
            .with_root(self.default_root)
            .with_chord(self.default_chord)
            .with_scale(self.default_scale)
            .with_visibility(self.visibility)
    }
}
