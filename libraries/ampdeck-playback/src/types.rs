//! Core types for playback sequencing

use crate::visualizer::VisualizerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A playable local audio file
///
/// Identity is the path itself: two tracks with the same path are the same
/// track, and the playlist never holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Track {
    path: PathBuf,
}

impl Track {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File path for the audio player
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name shown in the playlist and status line (file name only)
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl From<PathBuf> for Track {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for Track {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for Track {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Per-track playback lifecycle
///
/// ```text
/// Idle -> Loading -> Playing <-> Paused -> (Ended | Stopped) -> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing loaded, or the last track finished with nothing to follow
    Idle,

    /// Source handed to the player, playback not yet started
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Player reported end of media
    Ended,

    /// User stopped playback
    Stopped,
}

/// Navigation direction for next/previous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Previous,
}

/// What happens when next/previous walks past either end of the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Wrap around: next after the last track is the first one
    #[default]
    Wrap,

    /// Stop at the ends: next on the last track does nothing
    Clamp,
}

/// How shuffle picks the next index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    /// Uniform over the whole playlist, the current track included
    #[default]
    AllowCurrent,

    /// Uniform over every track except the current one
    ExcludeCurrent,
}

/// Configuration for the playback sequencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Boundary behavior for next/previous (default: wrap)
    pub boundary: BoundaryPolicy,

    /// Shuffle selection policy (default: allow current)
    pub shuffle: ShufflePolicy,

    /// Step used by seek forward/backward (default: 5 s)
    pub seek_step: Duration,

    /// Initial volume percent (0-100, default: 70)
    pub volume: u8,

    /// Bar visualizer settings
    pub visualizer: VisualizerConfig,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryPolicy::Wrap,
            shuffle: ShufflePolicy::AllowCurrent,
            seek_step: Duration::from_millis(5000),
            volume: 70,
            visualizer: VisualizerConfig::default(),
        }
    }
}
