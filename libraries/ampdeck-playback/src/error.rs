//! Error types for playback sequencing

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Requested playlist index does not exist
    #[error("Index out of bounds: {index} (playlist length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Operation needs a loaded source
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Audio backend rejected a command
    #[error("Audio player error: {0}")]
    Audio(String),
}

impl PlaybackError {
    /// Create an audio backend error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
