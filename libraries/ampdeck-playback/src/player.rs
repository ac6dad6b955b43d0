//! Audio player capability
//!
//! Decoding and output live outside this crate. The sequencer only needs a
//! handful of commands and three notifications from whatever backend plays
//! the files.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Platform audio player driven by the sequencer
///
/// Implementors load a file, start and pause it, and report progress back
/// through [`PlayerEvent`]s that the UI loop forwards to
/// `PlaybackSequencer::handle_player_event`.
pub trait AudioPlayer {
    /// Replace the current source with the file at `path`
    ///
    /// # Errors
    /// Returns an error if the backend cannot open the file
    fn load_source(&mut self, path: &Path) -> Result<()>;

    /// Start or resume playback of the loaded source
    fn play(&mut self);

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Stop playback and rewind
    fn stop(&mut self);

    /// Jump to a position from the start of the track
    fn seek(&mut self, position: Duration);

    /// Current playback position
    fn position(&self) -> Duration;

    /// Whether a source has been loaded
    fn has_source(&self) -> bool;

    /// Whether audio is currently audible (playing, not paused or stopped)
    fn is_playing(&self) -> bool;

    /// Output volume in `0.0..=1.0`
    fn volume(&self) -> f32;

    /// Set output volume in `0.0..=1.0`
    fn set_volume(&mut self, volume: f32);
}

/// Media status reported by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaStatus {
    NoMedia,
    Loading,
    Loaded,
    Buffering,
    Buffered,
    /// Current track finished playing naturally
    EndOfMedia,
    /// Source could not be decoded
    InvalidMedia,
}

/// Notifications emitted by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback position moved
    PositionChanged(Duration),

    /// Total length of the loaded source became known
    DurationChanged(Duration),

    /// Media status changed
    StatusChanged(MediaStatus),
}

/// In-memory player for unit tests
///
/// Records every command so tests can assert on what the sequencer asked for.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct DummyPlayer {
    pub loaded: Vec<std::path::PathBuf>,
    pub source: Option<std::path::PathBuf>,
    pub playing: bool,
    pub position: Duration,
    pub volume: f32,
    pub stops: usize,
    pub fail_loads: bool,
}

#[cfg(test)]
impl AudioPlayer for DummyPlayer {
    fn load_source(&mut self, path: &Path) -> Result<()> {
        if self.fail_loads {
            return Err(crate::error::PlaybackError::audio("cannot open"));
        }
        self.loaded.push(path.to_path_buf());
        self.source = Some(path.to_path_buf());
        self.position = Duration::ZERO;
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) {
        if self.source.is_some() {
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn stop(&mut self) {
        self.playing = false;
        self.position = Duration::ZERO;
        self.stops += 1;
    }

    fn seek(&mut self, position: Duration) {
        self.position = position;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}
