//! Session configuration

use crate::error::Result;
use ampdeck_playback::{BoundaryPolicy, SequencerConfig, ShufflePolicy, VisualizerConfig};
use ampdeck_settings::SettingsStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Visualizer look
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizerPreset {
    /// 40 green bars at 50 ms
    Classic,
    /// 35 gradient bars at 60 ms
    #[default]
    Pro,
}

impl VisualizerPreset {
    pub fn config(self) -> VisualizerConfig {
        match self {
            Self::Classic => VisualizerConfig::classic(),
            Self::Pro => VisualizerConfig::pro(),
        }
    }
}

/// Session configuration
///
/// Every field has a default, so `{}` is a valid config document.
///
/// ```json
/// { "boundary": "clamp", "shuffle": "exclude_current", "visualizer": "classic",
///   "default_volume": 50, "seek_step_ms": 10000, "settings_path": "/tmp/s.json" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Next/previous behaviour at the playlist edges
    pub boundary: BoundaryPolicy,

    /// Whether a shuffle pick may land on the current track
    pub shuffle: ShufflePolicy,

    pub visualizer: VisualizerPreset,

    /// Volume used when the settings file has none (0-100)
    pub default_volume: u8,

    /// Seek forward/backward step in milliseconds
    pub seek_step_ms: u64,

    /// Settings file override (default: `$HOME/.ampdeck_settings.json`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryPolicy::default(),
            shuffle: ShufflePolicy::default(),
            visualizer: VisualizerPreset::default(),
            default_volume: 70,
            seek_step_ms: 5000,
            settings_path: None,
        }
    }
}

impl SessionConfig {
    /// Parse a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn seek_step(&self) -> Duration {
        Duration::from_millis(self.seek_step_ms)
    }

    /// Sequencer settings derived from this config
    pub fn sequencer_config(&self) -> SequencerConfig {
        SequencerConfig {
            boundary: self.boundary,
            shuffle: self.shuffle,
            seek_step: self.seek_step(),
            volume: self.default_volume.min(100),
            visualizer: self.visualizer.config(),
        }
    }

    /// Settings store at the override path, or the default location
    pub fn settings_store(&self) -> Result<SettingsStore> {
        match &self.settings_path {
            Some(path) => Ok(SettingsStore::new(path)),
            None => Ok(SettingsStore::at_default_location()?),
        }
    }
}
