/// Session errors
use thiserror::Error;

/// Result type alias using `SessionError`
pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Settings error: {0}")]
    Settings(#[from] ampdeck_settings::SettingsError),

    #[error("Playback error: {0}")]
    Playback(#[from] ampdeck_playback::PlaybackError),

    #[error("Invalid session config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
