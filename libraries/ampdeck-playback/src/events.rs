//! Sequencer events
//!
//! The presentation layer drains these after each call into the sequencer
//! and repaints whatever changed. They are the only coupling between the
//! model and the widgets besides the public operations.

use crate::display::StatusLine;
use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Events emitted by the playback sequencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SequencerEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track was selected and handed to the player
    TrackChanged {
        /// Playlist index of the new track
        index: usize,
        /// Display name of the new track
        title: String,
    },

    /// Position update forwarded from the player
    PositionChanged {
        position: Duration,
        duration: Duration,
    },

    /// Track length became known
    DurationChanged { duration: Duration },

    /// Shuffle or repeat flag flipped
    ModesChanged { shuffle: bool, repeat: bool },

    /// Tracks added or removed
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Volume changed (0-100)
    VolumeChanged { level: u8 },

    /// Status line text changed
    StatusChanged { status: StatusLine },
}
