//! ampdeck - Playback Sequencing
//!
//! Platform-agnostic playlist sequencing for the ampdeck player.
//!
//! This crate provides:
//! - Ordered, duplicate-free playlist of local files
//! - Next/previous with a configurable boundary policy (wrap or clamp)
//! - Shuffle (random next index) and repeat (replay on end of media)
//! - Seek, volume and the `mm:ss` time display
//! - A cosmetic bar visualizer driven by the UI timer
//!
//! # Architecture
//!
//! `ampdeck-playback` does not decode or output audio. The platform provides
//! an [`AudioPlayer`] and forwards its [`PlayerEvent`]s; the UI drains
//! [`SequencerEvent`]s to repaint.
//!
//! # Example
//!
//! ```rust
//! use ampdeck_playback::{AudioPlayer, PlaybackSequencer, SequencerConfig, Result};
//! use std::path::Path;
//! use std::time::Duration;
//!
//! #[derive(Default)]
//! struct SilentPlayer {
//!     loaded: bool,
//!     playing: bool,
//!     volume: f32,
//! }
//!
//! impl AudioPlayer for SilentPlayer {
//!     fn load_source(&mut self, _path: &Path) -> Result<()> {
//!         self.loaded = true;
//!         Ok(())
//!     }
//!     fn play(&mut self) { self.playing = self.loaded; }
//!     fn pause(&mut self) { self.playing = false; }
//!     fn stop(&mut self) { self.playing = false; }
//!     fn seek(&mut self, _position: Duration) {}
//!     fn position(&self) -> Duration { Duration::ZERO }
//!     fn has_source(&self) -> bool { self.loaded }
//!     fn is_playing(&self) -> bool { self.playing }
//!     fn volume(&self) -> f32 { self.volume }
//!     fn set_volume(&mut self, volume: f32) { self.volume = volume; }
//! }
//!
//! let mut sequencer = PlaybackSequencer::new(SilentPlayer::default(), SequencerConfig::default());
//! sequencer.add_tracks(["/music/a.mp3", "/music/b.mp3"]);
//!
//! sequencer.play_current().unwrap();
//! assert_eq!(sequencer.current_index(), Some(0));
//!
//! sequencer.next().unwrap();
//! assert_eq!(sequencer.current_index(), Some(1));
//! ```

pub mod display;
mod error;
mod events;
mod player;
mod playlist;
mod sequencer;
mod shuffle;
pub mod types;
mod visualizer;
mod volume;

// Public exports
pub use display::{format_time, time_label, StatusLine};
pub use error::{PlaybackError, Result};
pub use events::SequencerEvent;
pub use player::{AudioPlayer, MediaStatus, PlayerEvent};
pub use playlist::{is_supported_audio, Playlist, SUPPORTED_EXTENSIONS};
pub use sequencer::PlaybackSequencer;
pub use shuffle::pick_index;
pub use types::{
    BoundaryPolicy, Direction, PlaybackState, SequencerConfig, ShufflePolicy, Track,
};
pub use visualizer::{BarVisualizer, VisualizerConfig};
pub use volume::Volume;
