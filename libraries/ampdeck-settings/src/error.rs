/// Settings-specific errors
use thiserror::Error;

/// Result type alias using `SettingsError`
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Home directory could not be resolved for the default settings path
    #[error("No home directory found for the settings file")]
    NoHomeDirectory,

    /// Theme is not a `#rgb` / `#rrggbb` colour
    #[error("Invalid theme colour: {0:?}")]
    InvalidTheme(String),

    /// Playlist path cannot be written as a JSON string
    #[error("Playlist path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(std::path::PathBuf),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
